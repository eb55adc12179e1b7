use roster_core::{FieldError, FieldErrorKind, FieldName};

use super::present;

pub const INVALID_MOBILE_MESSAGE: &str = "Invalid mobile number";

/// Digits only, no separators or leading `+`; length within `min..=max`.
pub fn check(raw: &str, min_digits: usize, max_digits: usize) -> Result<String, FieldError> {
    let value = present(raw).ok_or_else(|| FieldError::required(FieldName::MobileNumber))?;
    let all_digits = value.bytes().all(|b| b.is_ascii_digit());
    if !all_digits || !(min_digits..=max_digits).contains(&value.len()) {
        return Err(FieldError::new(
            FieldName::MobileNumber,
            FieldErrorKind::InvalidFormat,
            INVALID_MOBILE_MESSAGE,
        ));
    }
    Ok(value.to_string())
}
