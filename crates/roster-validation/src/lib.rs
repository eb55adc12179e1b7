//! # roster-validation
//!
//! Field-level validation of raw form submissions.
//!
//! Every field rule runs on every submission; a failure carries one
//! [`FieldError`](roster_core::FieldError) per violated field.
//!
//! ## Rules
//! 1. **Text** — first name, last name, status must be non-blank
//! 2. **Email** — present and `local@domain.tld` shaped
//! 3. **Choice** — role and supervisor must be one of the fixed options
//! 4. **Expiry** — present and an ISO calendar date
//! 5. **Mobile** — present and 7–15 ASCII digits
//! 6. **Payment** — present, numeric, and not below the minimum

pub mod engine;
pub mod patterns;
pub mod rules;

pub use engine::ValidationEngine;
