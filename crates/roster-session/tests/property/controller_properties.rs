use chrono::NaiveDate;
use proptest::prelude::*;
use roster_core::{Supervisor, UserDraft, UserRole};
use roster_session::{RandomIdGenerator, RecordListController};

fn draft(n: usize) -> UserDraft {
    UserDraft {
        first_name: format!("User{n}"),
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

#[derive(Debug, Clone)]
enum Op {
    Add,
    Remove(usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![Just(Op::Add), (0usize..12).prop_map(Op::Remove)]
}

// ── The controller behaves like a Vec with tolerant removal ───────────────

proptest! {
    #[test]
    fn controller_matches_vec_model(ops in prop::collection::vec(op(), 0..60)) {
        let ids = RandomIdGenerator::with_seed("UID", 10_000, 1);
        let mut list = RecordListController::new(Box::new(ids));
        let mut model: Vec<String> = Vec::new();

        for (n, op) in ops.into_iter().enumerate() {
            match op {
                Op::Add => {
                    let stored = list.add(draft(n));
                    prop_assert!(stored.id.starts_with("UID"));
                    model.push(stored.first_name);
                }
                Op::Remove(i) => {
                    let removed = list.remove_at(i);
                    if i < model.len() {
                        let expected = model.remove(i);
                        prop_assert_eq!(removed.map(|r| r.first_name), Some(expected));
                    } else {
                        prop_assert!(removed.is_none());
                    }
                }
            }
            let names: Vec<String> = list.list().iter().map(|r| r.first_name.clone()).collect();
            prop_assert_eq!(&names, &model);
        }
    }

    #[test]
    fn random_ids_keep_the_uid_format(seed in any::<u64>()) {
        let ids = RandomIdGenerator::with_seed("UID", 10_000, seed);
        let mut list = RecordListController::new(Box::new(ids));
        let stored = list.add(draft(0));
        let suffix: u32 = stored.id.strip_prefix("UID").unwrap().parse().unwrap();
        prop_assert!(suffix < 10_000);
    }
}
