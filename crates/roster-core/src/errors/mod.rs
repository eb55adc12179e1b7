mod field_error;
mod roster_error;

pub use field_error::{FieldError, FieldErrorKind, FieldErrors};
pub use roster_error::RosterError;

/// Convenience alias used across the workspace.
pub type RosterResult<T> = Result<T, RosterError>;
