use chrono::NaiveDate;
use roster_core::constants::EXPIRY_DATE_FORMAT;
use roster_core::{FieldError, FieldErrorKind, FieldName};

use super::present;

pub const INVALID_EXPIRY_MESSAGE: &str = "Invalid expiry date";

/// Any calendar date is accepted; past and future are both fine.
pub fn check(raw: &str) -> Result<NaiveDate, FieldError> {
    let value = present(raw).ok_or_else(|| FieldError::required(FieldName::ExpiryBy))?;
    let invalid = || {
        FieldError::new(
            FieldName::ExpiryBy,
            FieldErrorKind::InvalidFormat,
            INVALID_EXPIRY_MESSAGE,
        )
    };
    if !is_iso_shape(value) {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(value, EXPIRY_DATE_FORMAT).map_err(|_| invalid())
}

/// Exactly `YYYY-MM-DD`. chrono alone also takes `2025-1-1` and `+2025-01-01`.
fn is_iso_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}
