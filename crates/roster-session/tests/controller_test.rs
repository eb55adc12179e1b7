use chrono::NaiveDate;
use roster_core::{DialogState, Supervisor, UserDraft, UserRole};
use roster_session::{RecordListController, SequentialIdGenerator};

fn ann() -> UserDraft {
    UserDraft {
        first_name: "Ann".into(),
        last_name: "Lee".into(),
        email: "a@b.com".into(),
        user_role: UserRole::Role1,
        status: "active".into(),
        expiry_by: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        mobile_number: "1234567".into(),
        payment_limit: 100.0,
        supervisor: Supervisor::Sup1,
    }
}

fn named(first: &str) -> UserDraft {
    UserDraft {
        first_name: first.into(),
        ..ann()
    }
}

fn sequential() -> RecordListController {
    RecordListController::new(Box::new(SequentialIdGenerator::new("UID")))
}

// ── Add / remove ──────────────────────────────────────────────────────────

#[test]
fn add_then_remove_returns_to_empty() {
    let mut list = RecordListController::default();
    assert!(list.is_empty());

    let stored = list.add(ann());
    assert_eq!(list.len(), 1);
    assert!(!stored.id.is_empty());
    assert!(stored.id.starts_with("UID"));
    assert_eq!(list.list()[0], stored);
    assert_eq!(stored.first_name, "Ann");

    let removed = list.remove_at(0).unwrap();
    assert_eq!(removed, stored);
    assert_eq!(list.len(), 0);
}

#[test]
fn out_of_range_removal_is_a_no_op() {
    let mut list = sequential();
    list.add(ann());
    let before = list.snapshot();

    assert!(list.remove_at(5).is_none());
    assert!(list.remove_at(1).is_none());
    assert_eq!(list.list(), before.as_slice());
}

#[test]
fn insertion_order_is_display_order() {
    let mut list = sequential();
    for name in ["A", "B", "C"] {
        list.add(named(name));
    }
    let names: Vec<&str> = list.list().iter().map(|r| r.first_name.as_str()).collect();
    assert_eq!(names, vec!["A", "B", "C"]);
}

#[test]
fn removal_shifts_later_records_down() {
    let mut list = sequential();
    for name in ["A", "B", "C"] {
        list.add(named(name));
    }
    let removed = list.remove_at(1).unwrap();
    assert_eq!(removed.first_name, "B");
    assert_eq!(list.get(1).unwrap().first_name, "C");
    assert_eq!(list.get(1).unwrap().id, "UID3");
}

#[test]
fn ids_are_not_reused_after_removal() {
    let mut list = sequential();
    list.add(ann());
    list.remove_at(0);
    assert_eq!(list.add(ann()).id, "UID2");
}

#[test]
fn duplicate_records_are_allowed() {
    let mut list = sequential();
    list.add(ann());
    list.add(ann());
    assert_eq!(list.len(), 2);
    assert_eq!(list.list()[0].email, list.list()[1].email);
}

#[test]
fn list_reads_are_idempotent() {
    let mut list = sequential();
    list.add(ann());
    let first = list.snapshot();
    let second = list.snapshot();
    assert_eq!(first, second);
    assert_eq!(list.list(), first.as_slice());
}

// ── Dialog ────────────────────────────────────────────────────────────────

#[test]
fn dialog_starts_closed() {
    assert_eq!(sequential().dialog_state(), DialogState::Closed);
}

#[test]
fn dialog_toggles_are_idempotent() {
    let mut list = sequential();
    assert!(list.open_dialog());
    assert!(!list.open_dialog());
    assert_eq!(list.dialog_state(), DialogState::Open);
    assert!(list.close_dialog());
    assert!(!list.close_dialog());
    assert_eq!(list.dialog_state(), DialogState::Closed);
}
