use roster_core::{FieldError, FieldErrorKind, FieldName};

use super::present;

pub const NOT_A_NUMBER_MESSAGE: &str = "Payment limit must be a number";
pub const NEGATIVE_LIMIT_MESSAGE: &str = "Payment limit must be a positive number";

/// Parse the limit and enforce the inclusive lower bound.
pub fn check(raw: &str, min: f64) -> Result<f64, FieldError> {
    let value = present(raw).ok_or_else(|| FieldError::required(FieldName::PaymentLimit))?;
    let limit = value
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| {
            FieldError::new(
                FieldName::PaymentLimit,
                FieldErrorKind::InvalidFormat,
                NOT_A_NUMBER_MESSAGE,
            )
        })?;
    if limit < min {
        return Err(FieldError::new(
            FieldName::PaymentLimit,
            FieldErrorKind::RangeViolation,
            NEGATIVE_LIMIT_MESSAGE,
        ));
    }
    // -0 compares equal to 0 and would otherwise render as "-0".
    Ok(if limit == 0.0 { 0.0 } else { limit })
}
