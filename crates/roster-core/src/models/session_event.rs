use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::DialogState;
use crate::errors::FieldErrors;
use crate::record::UserRecord;

/// What changed as the result of one input event.
///
/// The presentation layer redraws from these instead of tracking state itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    /// A record was appended at `index`.
    RecordAdded { index: usize, record: UserRecord },
    /// The record at `index` was removed; later rows shifted down by one.
    RecordRemoved { index: usize, record: UserRecord },
    /// A delete targeted an index outside the list; nothing changed.
    RemovalIgnored { index: usize, len: usize },
    /// The submission failed validation; the list is unchanged.
    SubmissionRejected { errors: FieldErrors },
    /// The dialog moved to a new state.
    DialogChanged { state: DialogState },
}
