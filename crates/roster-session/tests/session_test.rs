use roster_core::config::{IdStrategy, RosterConfig};
use roster_core::{DialogState, FieldErrorKind, FieldName, RawForm, SessionEvent};
use roster_session::{FormEvent, RosterSession};

fn sequential_session() -> RosterSession {
    let mut config = RosterConfig::default();
    config.ids.strategy = IdStrategy::Sequential;
    RosterSession::new(&config)
}

fn valid_payload() -> RawForm {
    RawForm::new()
        .with(FieldName::FirstName, "Ann")
        .with(FieldName::LastName, "Lee")
        .with(FieldName::Email, "a@b.com")
        .with(FieldName::UserRole, "role1")
        .with(FieldName::Status, "active")
        .with(FieldName::ExpiryBy, "2025-01-01")
        .with(FieldName::MobileNumber, "1234567")
        .with(FieldName::PaymentLimit, "100")
        .with(FieldName::Supervisor, "sup1")
}

#[test]
fn open_then_valid_submit_closes_dialog_and_appends() {
    let mut session = sequential_session();

    let events = session.handle(FormEvent::OpenAddDialog);
    assert_eq!(
        events,
        vec![SessionEvent::DialogChanged {
            state: DialogState::Open
        }]
    );
    assert_eq!(session.current_dialog_state(), DialogState::Open);

    let events = session.handle(FormEvent::SubmitForm(valid_payload()));
    assert_eq!(events.len(), 2);
    match &events[0] {
        SessionEvent::RecordAdded { index, record } => {
            assert_eq!(*index, 0);
            assert_eq!(record.id, "UID1");
        }
        other => panic!("expected RecordAdded, got {other:?}"),
    }
    assert_eq!(
        events[1],
        SessionEvent::DialogChanged {
            state: DialogState::Closed
        }
    );
    assert_eq!(session.current_dialog_state(), DialogState::Closed);
    assert_eq!(session.current_list().len(), 1);
    assert!(session.current_field_errors().is_empty());
}

#[test]
fn rejected_submit_keeps_dialog_open_and_reports_errors() {
    let mut session = sequential_session();
    session.open_add_dialog();

    let bad = valid_payload()
        .with(FieldName::Email, "not-an-email")
        .with(FieldName::PaymentLimit, "-5");
    let events = session.submit_form(bad);

    assert_eq!(events.len(), 1);
    assert!(matches!(events[0], SessionEvent::SubmissionRejected { .. }));
    assert_eq!(session.current_dialog_state(), DialogState::Open);
    assert!(session.current_list().is_empty());

    let errors = session.current_field_errors();
    assert_eq!(errors.kind(FieldName::Email), Some(FieldErrorKind::InvalidFormat));
    assert_eq!(
        errors.kind(FieldName::PaymentLimit),
        Some(FieldErrorKind::RangeViolation)
    );
    // The rejected values stay in the draft for correction.
    assert_eq!(session.draft().get(FieldName::Email), "not-an-email");
}

#[test]
fn new_submission_clears_previous_errors() {
    let mut session = sequential_session();
    session.open_add_dialog();
    session.submit_form(valid_payload().with(FieldName::FirstName, ""));
    assert!(session.current_field_errors().contains(FieldName::FirstName));

    session.submit_form(valid_payload().with(FieldName::Email, "x"));
    let errors = session.current_field_errors();
    assert!(!errors.contains(FieldName::FirstName));
    assert!(errors.contains(FieldName::Email));

    session.submit_form(valid_payload());
    assert!(session.current_field_errors().is_empty());
}

#[test]
fn cancel_closes_and_keeps_draft_and_errors() {
    let mut session = sequential_session();
    session.open_add_dialog();
    session.submit_form(valid_payload().with(FieldName::Status, " "));

    let events = session.handle(FormEvent::CancelForm);
    assert_eq!(
        events,
        vec![SessionEvent::DialogChanged {
            state: DialogState::Closed
        }]
    );
    assert!(session.current_field_errors().contains(FieldName::Status));
    assert_eq!(session.draft().get(FieldName::FirstName), "Ann");
}

#[test]
fn cancel_when_closed_emits_nothing() {
    let mut session = sequential_session();
    assert!(session.cancel_form().is_empty());
    session.open_add_dialog();
    assert!(session.open_add_dialog().is_empty());
}

#[test]
fn draft_fields_build_up_and_reset_after_success() {
    let mut session = sequential_session();
    session.open_add_dialog();
    for field in FieldName::ALL {
        session.handle(FormEvent::SetField {
            field,
            value: valid_payload().get(field).to_string(),
        });
    }
    let events = session.handle(FormEvent::SubmitDraft);
    assert!(matches!(events[0], SessionEvent::RecordAdded { .. }));
    assert!(session.draft().is_empty());
}

#[test]
fn delete_reports_removed_record_and_ignored_index() {
    let mut session = sequential_session();
    session.submit_form(valid_payload());

    let events = session.handle(FormEvent::DeleteEntry(5));
    assert_eq!(events, vec![SessionEvent::RemovalIgnored { index: 5, len: 1 }]);
    assert_eq!(session.current_list().len(), 1);

    let events = session.handle(FormEvent::DeleteEntry(0));
    match &events[0] {
        SessionEvent::RecordRemoved { index, record } => {
            assert_eq!(*index, 0);
            assert_eq!(record.first_name, "Ann");
        }
        other => panic!("expected RecordRemoved, got {other:?}"),
    }
    assert!(session.current_list().is_empty());
}

#[test]
fn delete_far_past_the_end_is_ignored() {
    let mut session = sequential_session();
    session.submit_form(valid_payload());

    let events = session.delete_entry(usize::MAX);
    assert_eq!(
        events,
        vec![SessionEvent::RemovalIgnored {
            index: usize::MAX,
            len: 1
        }]
    );
    assert_eq!(session.current_list().len(), 1);
}

#[test]
fn submit_while_closed_still_adds() {
    let mut session = sequential_session();
    let events = session.submit_form(valid_payload());
    assert_eq!(events.len(), 1, "no dialog change when already closed");
    assert_eq!(session.current_list().len(), 1);
}

#[test]
fn snapshot_serializes_for_the_frontend() {
    let mut session = sequential_session();
    session.open_add_dialog();
    session.submit_form(valid_payload().with(FieldName::MobileNumber, "12a4567"));

    let json = serde_json::to_value(session.snapshot()).unwrap();
    assert_eq!(json["dialog"], "open");
    assert_eq!(json["records"].as_array().unwrap().len(), 0);
    assert_eq!(json["fieldErrors"]["mobileNumber"]["kind"], "InvalidFormat");
    assert_eq!(json["draft"]["mobileNumber"], "12a4567");
}

#[test]
fn sessions_have_distinct_ids() {
    let a = RosterSession::default();
    let b = RosterSession::default();
    assert_ne!(a.session_id(), b.session_id());
}
