//! Compiled regexes shared by the field rules.

use regex::Regex;
use std::sync::LazyLock;

use roster_core::constants::EMAIL_PATTERN;

/// `None` only if the pattern fails to compile, which the email rule treats
/// as "nothing matches".
pub static RE_EMAIL: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(EMAIL_PATTERN).ok());

/// Whether the email pattern compiled.
pub fn email_pattern_healthy() -> bool {
    RE_EMAIL.is_some()
}
