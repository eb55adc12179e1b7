//! # roster-core
//!
//! Foundation crate for the Roster user-entry form.
//! Defines the record model, form field catalogue, errors, config, and the
//! traits the validation engine and record list controller plug into.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod record;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::RosterConfig;
pub use errors::{FieldError, FieldErrorKind, FieldErrors, RosterError, RosterResult};
pub use models::{DialogState, SessionEvent};
pub use record::{FieldName, RawForm, Supervisor, UserDraft, UserRecord, UserRole};
