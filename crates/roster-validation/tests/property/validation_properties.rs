use proptest::prelude::*;
use roster_core::{FieldErrorKind, FieldName, RawForm};
use roster_validation::ValidationEngine;

fn valid_form() -> RawForm {
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

fn any_field() -> impl Strategy<Value = FieldName> {
    prop::sample::select(FieldName::ALL.to_vec())
}

// ── Blank fields are always reported as missing ───────────────────────────

proptest! {
    #[test]
    fn blank_field_is_required(field in any_field(), blank in "[ \t]{0,6}") {
        let engine = ValidationEngine::default();
        let errors = engine
            .validate_form(&valid_form().with(field, blank))
            .unwrap_err();
        prop_assert_eq!(errors.len(), 1);
        prop_assert_eq!(errors.kind(field), Some(FieldErrorKind::RequiredFieldMissing));
    }
}

// ── Mobile numbers ────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn mobile_in_length_range_passes(number in "[0-9]{7,15}") {
        let engine = ValidationEngine::default();
        let form = valid_form().with(FieldName::MobileNumber, number);
        prop_assert!(engine.validate_form(&form).is_ok());
    }

    #[test]
    fn mobile_outside_length_range_fails(number in "[0-9]{1,6}|[0-9]{16,24}") {
        let engine = ValidationEngine::default();
        let errors = engine
            .validate_form(&valid_form().with(FieldName::MobileNumber, number))
            .unwrap_err();
        prop_assert_eq!(errors.kind(FieldName::MobileNumber), Some(FieldErrorKind::InvalidFormat));
    }
}

// ── Payment limit ─────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn non_negative_limits_pass(limit in 0.0f64..1e12) {
        let engine = ValidationEngine::default();
        let form = valid_form().with(FieldName::PaymentLimit, limit.to_string());
        let draft = engine.validate_form(&form).unwrap();
        prop_assert_eq!(draft.payment_limit, limit);
    }

    #[test]
    fn negative_limits_violate_range(limit in -1e12f64..-1e-9) {
        let engine = ValidationEngine::default();
        let errors = engine
            .validate_form(&valid_form().with(FieldName::PaymentLimit, limit.to_string()))
            .unwrap_err();
        prop_assert_eq!(errors.kind(FieldName::PaymentLimit), Some(FieldErrorKind::RangeViolation));
    }
}

// ── Email ─────────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn well_shaped_emails_pass(
        user in "[a-z0-9._%+-]{1,12}",
        domain in "[a-z0-9-]{1,12}",
        tld in "[a-z]{2,4}"
    ) {
        let engine = ValidationEngine::default();
        let form = valid_form().with(FieldName::Email, format!("{user}@{domain}.{tld}"));
        prop_assert!(engine.validate_form(&form).is_ok());
    }

    #[test]
    fn emails_without_at_sign_fail(text in "[a-z0-9.]{1,20}") {
        let engine = ValidationEngine::default();
        let errors = engine
            .validate_form(&valid_form().with(FieldName::Email, text))
            .unwrap_err();
        prop_assert_eq!(errors.kind(FieldName::Email), Some(FieldErrorKind::InvalidFormat));
        prop_assert_eq!(errors.len(), 1);
    }
}

// ── Validation is pure ────────────────────────────────────────────────────

proptest! {
    #[test]
    fn validation_is_deterministic(field in any_field(), value in ".{0,20}") {
        let engine = ValidationEngine::default();
        let form = valid_form().with(field, value);
        prop_assert_eq!(engine.validate_form(&form), engine.validate_form(&form));
    }
}
