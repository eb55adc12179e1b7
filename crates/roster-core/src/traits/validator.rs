use crate::errors::FieldErrors;
use crate::record::{RawForm, UserDraft};

/// Per-field form validation.
pub trait IValidator: Send + Sync {
    /// Evaluate every field rule. On failure the map holds one entry per
    /// violated field, not just the first.
    fn validate(&self, raw: &RawForm) -> Result<UserDraft, FieldErrors>;
}
