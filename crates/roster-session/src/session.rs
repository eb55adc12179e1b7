//! RosterSession — the application context between the presentation layer
//! and the core.
//!
//! The presentation layer sends a [`FormEvent`] and redraws from the
//! returned [`SessionEvent`]s. It never holds its own copy of the list.

use serde::Serialize;
use tracing::{debug, info_span};
use uuid::Uuid;

use roster_core::models::{FormOptions, TableView};
use roster_core::traits::IValidator;
use roster_core::{
    DialogState, FieldErrors, FieldName, RawForm, RosterConfig, SessionEvent, UserRecord,
};
use roster_observability::events;
use roster_validation::ValidationEngine;

use crate::controller::RecordListController;
use crate::table::build_table_view;

/// Input events the core consumes.
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    /// "Add new user" intent.
    OpenAddDialog,
    CancelForm,
    /// Submit the given values; they also replace the draft.
    SubmitForm(RawForm),
    /// Submit whatever the draft currently holds.
    SubmitDraft,
    SetField { field: FieldName, value: String },
    /// Delete action on the row at this index.
    DeleteEntry(usize),
}

/// Everything the presentation layer renders, in one value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub records: Vec<UserRecord>,
    pub dialog: DialogState,
    pub field_errors: FieldErrors,
    pub draft: RawForm,
}

/// One user's form session: validator, record list, dialog, draft and the
/// errors of the last submission.
pub struct RosterSession {
    session_id: String,
    validator: Box<dyn IValidator>,
    controller: RecordListController,
    field_errors: FieldErrors,
    draft: RawForm,
}

impl RosterSession {
    pub fn new(config: &RosterConfig) -> Self {
        Self::with_parts(
            Box::new(ValidationEngine::new(config.validation.clone())),
            RecordListController::from_config(&config.ids),
        )
    }

    /// Assemble from explicit parts, e.g. a seeded id generator in tests.
    pub fn with_parts(validator: Box<dyn IValidator>, controller: RecordListController) -> Self {
        let session_id = Uuid::new_v4().to_string();
        debug!(session_id = %session_id, "session created");
        Self {
            session_id,
            validator,
            controller,
            field_errors: FieldErrors::new(),
            draft: RawForm::new(),
        }
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Dispatch one input event.
    pub fn handle(&mut self, event: FormEvent) -> Vec<SessionEvent> {
        let _span = info_span!("roster_event", session_id = %self.session_id).entered();
        match event {
            FormEvent::OpenAddDialog => self.open_add_dialog(),
            FormEvent::CancelForm => self.cancel_form(),
            FormEvent::SubmitForm(raw) => self.submit_form(raw),
            FormEvent::SubmitDraft => self.submit_draft(),
            FormEvent::SetField { field, value } => {
                self.set_field(field, value);
                Vec::new()
            }
            FormEvent::DeleteEntry(index) => self.delete_entry(index),
        }
    }

    pub fn open_add_dialog(&mut self) -> Vec<SessionEvent> {
        let changed = self.controller.open_dialog();
        self.dialog_event(changed, DialogState::Open)
    }

    /// Close without submitting. The draft and last errors are kept.
    pub fn cancel_form(&mut self) -> Vec<SessionEvent> {
        let changed = self.controller.close_dialog();
        self.dialog_event(changed, DialogState::Closed)
    }

    pub fn set_field(&mut self, field: FieldName, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    pub fn submit_draft(&mut self) -> Vec<SessionEvent> {
        let raw = self.draft.clone();
        self.submit_form(raw)
    }

    /// Validate and, on success, append the record and close the dialog.
    ///
    /// Previous field errors are cleared first. On failure the list and
    /// dialog are unchanged and the new errors are kept for display.
    pub fn submit_form(&mut self, raw: RawForm) -> Vec<SessionEvent> {
        self.field_errors.clear();
        self.draft = raw;

        match self.validator.validate(&self.draft) {
            Ok(draft) => {
                let index = self.controller.len();
                let record = self.controller.add(draft);
                events::record_added(&self.session_id, &record.id, index);
                self.draft.clear();
                let mut out = vec![SessionEvent::RecordAdded { index, record }];
                let changed = self.controller.close_dialog();
                out.extend(self.dialog_event(changed, DialogState::Closed));
                out
            }
            Err(errors) => {
                let fields: Vec<&str> = errors.fields().iter().map(|f| f.as_str()).collect();
                events::submission_rejected(&self.session_id, &fields);
                self.field_errors = errors.clone();
                vec![SessionEvent::SubmissionRejected { errors }]
            }
        }
    }

    /// Delete the row at `index`. Out of range is reported, not an error.
    pub fn delete_entry(&mut self, index: usize) -> Vec<SessionEvent> {
        match self.controller.remove_at(index) {
            Some(record) => {
                events::record_removed(&self.session_id, &record.id, index);
                vec![SessionEvent::RecordRemoved { index, record }]
            }
            None => {
                let len = self.controller.len();
                events::removal_ignored(&self.session_id, index, len);
                vec![SessionEvent::RemovalIgnored { index, len }]
            }
        }
    }

    pub fn current_list(&self) -> &[UserRecord] {
        self.controller.list()
    }

    pub fn current_dialog_state(&self) -> DialogState {
        self.controller.dialog_state()
    }

    pub fn current_field_errors(&self) -> &FieldErrors {
        &self.field_errors
    }

    pub fn draft(&self) -> &RawForm {
        &self.draft
    }

    pub fn controller(&self) -> &RecordListController {
        &self.controller
    }

    pub fn table_view(&self) -> TableView {
        build_table_view(self.controller.list())
    }

    pub fn form_options(&self) -> FormOptions {
        FormOptions::new()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            records: self.controller.snapshot(),
            dialog: self.controller.dialog_state(),
            field_errors: self.field_errors.clone(),
            draft: self.draft.clone(),
        }
    }

    fn dialog_event(&self, changed: bool, state: DialogState) -> Vec<SessionEvent> {
        if !changed {
            return Vec::new();
        }
        let label = if state.is_open() { "open" } else { "closed" };
        events::dialog_changed(&self.session_id, label);
        vec![SessionEvent::DialogChanged { state }]
    }
}

impl Default for RosterSession {
    fn default() -> Self {
        Self::new(&RosterConfig::default())
    }
}
