//! Structured log events for key session operations.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log a record appended to the list.
pub fn record_added(session_id: &str, record_id: &str, index: usize) {
    tracing::info!(
        event = "record_added",
        session_id = %session_id,
        record_id = %record_id,
        index = index,
        "record added"
    );
}

/// Log a record removed from the list.
pub fn record_removed(session_id: &str, record_id: &str, index: usize) {
    tracing::info!(
        event = "record_removed",
        session_id = %session_id,
        record_id = %record_id,
        index = index,
        "record removed"
    );
}

/// Log a delete aimed past the end of the list.
pub fn removal_ignored(session_id: &str, index: usize, len: usize) {
    tracing::debug!(
        event = "removal_ignored",
        session_id = %session_id,
        index = index,
        len = len,
        "removal index out of range"
    );
}

/// Log a submission that failed validation.
pub fn submission_rejected(session_id: &str, fields: &[&str]) {
    tracing::info!(
        event = "submission_rejected",
        session_id = %session_id,
        failed = fields.len(),
        fields = ?fields,
        "submission rejected"
    );
}

/// Log a dialog transition.
pub fn dialog_changed(session_id: &str, state: &str) {
    tracing::debug!(
        event = "dialog_changed",
        session_id = %session_id,
        state = %state,
        "dialog state changed"
    );
}
