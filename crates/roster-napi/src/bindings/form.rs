//! Form bindings: dialog intents, field edits, submission.
//!
//! Mutating calls return the resulting session events as a JSON array.

use napi_derive::napi;
use tracing::debug;

use roster_core::{FieldName, RawForm};

use crate::conversions::error_types::{to_json, to_napi_error};
use crate::runtime;

/// "Add new user" intent.
#[napi]
pub fn roster_open_add_dialog() -> napi::Result<serde_json::Value> {
    let events = runtime::with_session(|s| s.open_add_dialog())?;
    to_json(&events)
}

/// Close the dialog without submitting.
#[napi]
pub fn roster_cancel_form() -> napi::Result<serde_json::Value> {
    let events = runtime::with_session(|s| s.cancel_form())?;
    to_json(&events)
}

/// Update one draft field by wire name.
#[napi]
pub fn roster_set_field(field: String, value: String) -> napi::Result<()> {
    let field: FieldName = field.parse().map_err(to_napi_error)?;
    runtime::with_session(|s| s.set_field(field, value))
}

/// Submit a complete payload: `{ firstName, lastName, ... }`.
#[napi]
pub fn roster_submit_form(payload: serde_json::Value) -> napi::Result<serde_json::Value> {
    debug!("NAPI: submit_form");
    let raw = RawForm::from_json(&payload).map_err(to_napi_error)?;
    let events = runtime::with_session(|s| s.submit_form(raw))?;
    to_json(&events)
}

/// Submit the values accumulated through `roster_set_field`.
#[napi]
pub fn roster_submit_draft() -> napi::Result<serde_json::Value> {
    debug!("NAPI: submit_draft");
    let events = runtime::with_session(|s| s.submit_draft())?;
    to_json(&events)
}

/// Current draft values keyed by wire name.
#[napi]
pub fn roster_current_draft() -> napi::Result<serde_json::Value> {
    let draft = runtime::with_session(|s| s.draft().clone())?;
    to_json(&draft)
}

/// Field errors of the last submission, keyed by wire name.
#[napi]
pub fn roster_current_field_errors() -> napi::Result<serde_json::Value> {
    let errors = runtime::with_session(|s| s.current_field_errors().clone())?;
    to_json(&errors)
}

/// `"open"` or `"closed"`.
#[napi]
pub fn roster_current_dialog_state() -> napi::Result<serde_json::Value> {
    let state = runtime::with_session(|s| s.current_dialog_state())?;
    to_json(&state)
}

/// Field labels and select options for laying out the form.
#[napi]
pub fn roster_form_options() -> napi::Result<serde_json::Value> {
    let options = runtime::with_session(|s| s.form_options())?;
    to_json(&options)
}
