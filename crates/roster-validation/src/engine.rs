//! ValidationEngine — implements IValidator, runs every field rule and
//! aggregates the failures.

use roster_core::config::ValidationConfig;
use roster_core::traits::IValidator;
use roster_core::{FieldError, FieldErrors, FieldName, RawForm, UserDraft};
use tracing::debug;

use crate::rules::{choice, email, expiry, mobile, payment, text};

/// Stateless validator for one form submission.
#[derive(Debug, Clone, Default)]
pub struct ValidationEngine {
    config: ValidationConfig,
}

impl ValidationEngine {
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Get the engine configuration.
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Validate a raw submission.
    ///
    /// All rules run even after one fails, so the error map is complete.
    pub fn validate_form(&self, raw: &RawForm) -> Result<UserDraft, FieldErrors> {
        let mut errors = FieldErrors::new();

        let first_name = collect(
            &mut errors,
            text::check(FieldName::FirstName, raw.get(FieldName::FirstName)),
        );
        let last_name = collect(
            &mut errors,
            text::check(FieldName::LastName, raw.get(FieldName::LastName)),
        );
        let email = collect(&mut errors, email::check(raw.get(FieldName::Email)));
        let user_role = collect(&mut errors, choice::check_role(raw.get(FieldName::UserRole)));
        let status = collect(
            &mut errors,
            text::check(FieldName::Status, raw.get(FieldName::Status)),
        );
        let expiry_by = collect(&mut errors, expiry::check(raw.get(FieldName::ExpiryBy)));
        let mobile_number = collect(
            &mut errors,
            mobile::check(
                raw.get(FieldName::MobileNumber),
                self.config.mobile_min_digits,
                self.config.mobile_max_digits,
            ),
        );
        let payment_limit = collect(
            &mut errors,
            payment::check(raw.get(FieldName::PaymentLimit), self.config.min_payment_limit),
        );
        let supervisor = collect(
            &mut errors,
            choice::check_supervisor(raw.get(FieldName::Supervisor)),
        );

        match (
            first_name,
            last_name,
            email,
            user_role,
            status,
            expiry_by,
            mobile_number,
            payment_limit,
            supervisor,
        ) {
            (
                Some(first_name),
                Some(last_name),
                Some(email),
                Some(user_role),
                Some(status),
                Some(expiry_by),
                Some(mobile_number),
                Some(payment_limit),
                Some(supervisor),
            ) => Ok(UserDraft {
                first_name,
                last_name,
                email,
                user_role,
                status,
                expiry_by,
                mobile_number,
                payment_limit,
                supervisor,
            }),
            _ => {
                debug!(
                    failed = errors.len(),
                    fields = ?errors.fields(),
                    "form submission failed validation"
                );
                Err(errors)
            }
        }
    }
}

/// Keep the value on success, record the error otherwise.
fn collect<T>(errors: &mut FieldErrors, result: Result<T, FieldError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            errors.insert(e);
            None
        }
    }
}

impl IValidator for ValidationEngine {
    fn validate(&self, raw: &RawForm) -> Result<UserDraft, FieldErrors> {
        self.validate_form(raw)
    }
}
