//! Select fields. A value outside the option set is treated the same as no
//! selection, matching the placeholder `<option value="">`.

use roster_core::{FieldError, FieldName, Supervisor, UserRole};

pub fn check_role(raw: &str) -> Result<UserRole, FieldError> {
    UserRole::parse(raw.trim()).ok_or_else(|| FieldError::required(FieldName::UserRole))
}

pub fn check_supervisor(raw: &str) -> Result<Supervisor, FieldError> {
    Supervisor::parse(raw.trim()).ok_or_else(|| FieldError::required(FieldName::Supervisor))
}
