//! Record list bindings: reads and the per-row delete action.

use napi_derive::napi;

use crate::conversions::error_types::to_json;
use crate::runtime;

/// Delete the row at `index`. Negative or past-the-end indices are ignored.
#[napi]
pub fn roster_delete_entry(index: i64) -> napi::Result<serde_json::Value> {
    let index = usize::try_from(index).unwrap_or(usize::MAX);
    let events = runtime::with_session(|s| s.delete_entry(index))?;
    to_json(&events)
}

/// The record list in display order.
#[napi]
pub fn roster_current_list() -> napi::Result<serde_json::Value> {
    let records = runtime::with_session(|s| s.current_list().to_vec())?;
    to_json(&records)
}

/// Render model for the user table.
#[napi]
pub fn roster_table_view() -> napi::Result<serde_json::Value> {
    let view = runtime::with_session(|s| s.table_view())?;
    to_json(&view)
}

/// Records, dialog state, field errors and draft in one call.
#[napi]
pub fn roster_snapshot() -> napi::Result<serde_json::Value> {
    let snapshot = runtime::with_session(|s| s.snapshot())?;
    to_json(&snapshot)
}
