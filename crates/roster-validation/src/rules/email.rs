use roster_core::{FieldError, FieldErrorKind, FieldName};

use super::present;
use crate::patterns::RE_EMAIL;

pub const INVALID_EMAIL_MESSAGE: &str = "Invalid email address";

pub fn check(raw: &str) -> Result<String, FieldError> {
    let value = present(raw).ok_or_else(|| FieldError::required(FieldName::Email))?;
    let matches = RE_EMAIL.as_ref().is_some_and(|re| re.is_match(value));
    if !matches {
        return Err(FieldError::new(
            FieldName::Email,
            FieldErrorKind::InvalidFormat,
            INVALID_EMAIL_MESSAGE,
        ));
    }
    Ok(value.to_string())
}
