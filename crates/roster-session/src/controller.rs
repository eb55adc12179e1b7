//! RecordListController — sole owner of the record list and dialog flag.

use roster_core::config::IdConfig;
use roster_core::traits::IIdGenerator;
use roster_core::{DialogState, UserDraft, UserRecord};
use tracing::debug;

use crate::id;

/// Ordered, append-only list of accepted records plus the entry dialog state.
///
/// Insertion order is display order. No cross-record uniqueness is enforced.
pub struct RecordListController {
    records: Vec<UserRecord>,
    dialog: DialogState,
    ids: Box<dyn IIdGenerator>,
}

impl RecordListController {
    pub fn new(ids: Box<dyn IIdGenerator>) -> Self {
        Self {
            records: Vec::new(),
            dialog: DialogState::Closed,
            ids,
        }
    }

    pub fn from_config(config: &IdConfig) -> Self {
        Self::new(id::from_config(config))
    }

    /// Assign an id and append. Returns the stored record.
    pub fn add(&mut self, draft: UserDraft) -> UserRecord {
        let record = draft.into_record(self.ids.next_id());
        debug!(id = %record.id, index = self.records.len(), "appending record");
        self.records.push(record.clone());
        record
    }

    /// Remove the record at `index`, shifting later records down.
    ///
    /// An out-of-range index leaves the list untouched and returns `None`.
    pub fn remove_at(&mut self, index: usize) -> Option<UserRecord> {
        if index >= self.records.len() {
            debug!(index, len = self.records.len(), "removal index out of range, ignored");
            return None;
        }
        let record = self.records.remove(index);
        debug!(id = %record.id, index, "removing record");
        Some(record)
    }

    /// Read-only view, in insertion order.
    pub fn list(&self) -> &[UserRecord] {
        &self.records
    }

    /// Owned copy of the list for callers that outlive the borrow.
    pub fn snapshot(&self) -> Vec<UserRecord> {
        self.records.clone()
    }

    pub fn get(&self, index: usize) -> Option<&UserRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn dialog_state(&self) -> DialogState {
        self.dialog
    }

    /// Returns true if the state changed.
    pub fn open_dialog(&mut self) -> bool {
        self.set_dialog(DialogState::Open)
    }

    /// Returns true if the state changed.
    pub fn close_dialog(&mut self) -> bool {
        self.set_dialog(DialogState::Closed)
    }

    fn set_dialog(&mut self, state: DialogState) -> bool {
        if self.dialog == state {
            return false;
        }
        debug!(from = ?self.dialog, to = ?state, "dialog state changed");
        self.dialog = state;
        true
    }
}

impl Default for RecordListController {
    fn default() -> Self {
        Self::from_config(&IdConfig::default())
    }
}

impl std::fmt::Debug for RecordListController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordListController")
            .field("records", &self.records)
            .field("dialog", &self.dialog)
            .finish_non_exhaustive()
    }
}
