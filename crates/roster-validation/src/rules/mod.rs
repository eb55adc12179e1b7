//! One module per field rule.
//!
//! Each rule takes the raw field value and returns the normalized value or
//! the single [`FieldError`](roster_core::FieldError) for that field.

pub mod choice;
pub mod email;
pub mod expiry;
pub mod mobile;
pub mod payment;
pub mod text;

/// Raw value with surrounding whitespace removed; blank values become `None`.
pub(crate) fn present(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
