use roster_core::{FieldError, FieldName};

use super::present;

/// Free-text field that only needs to be non-blank.
pub fn check(field: FieldName, raw: &str) -> Result<String, FieldError> {
    present(raw)
        .map(str::to_string)
        .ok_or_else(|| FieldError::required(field))
}
