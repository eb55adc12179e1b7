use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::record::FieldName;

/// The three ways a single field can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum FieldErrorKind {
    /// Empty, whitespace-only, or not one of a fixed option set.
    RequiredFieldMissing,
    /// Present but not in the accepted shape.
    InvalidFormat,
    /// Well-formed but outside the accepted numeric range.
    RangeViolation,
}

/// One violated field rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FieldError {
    pub field: FieldName,
    pub kind: FieldErrorKind,
    /// Human-readable message for inline display.
    pub message: String,
}

impl FieldError {
    pub fn new(field: FieldName, kind: FieldErrorKind, message: impl Into<String>) -> Self {
        Self {
            field,
            kind,
            message: message.into(),
        }
    }

    /// Required-field failure with the field's standard message.
    pub fn required(field: FieldName) -> Self {
        Self::new(
            field,
            FieldErrorKind::RequiredFieldMissing,
            field.required_message(),
        )
    }
}

/// Every violated field of one submission, keyed by field.
///
/// At most one error per field; iteration follows form order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldErrors(BTreeMap<FieldName, FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure. A later failure for the same field replaces the earlier one.
    pub fn insert(&mut self, error: FieldError) {
        self.0.insert(error.field, error);
    }

    pub fn get(&self, field: FieldName) -> Option<&FieldError> {
        self.0.get(&field)
    }

    pub fn kind(&self, field: FieldName) -> Option<FieldErrorKind> {
        self.0.get(&field).map(|e| e.kind)
    }

    pub fn contains(&self, field: FieldName) -> bool {
        self.0.contains_key(&field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.values()
    }

    /// Fields that failed, in form order.
    pub fn fields(&self) -> Vec<FieldName> {
        self.0.keys().copied().collect()
    }

    /// Wire field name → message, the shape an inline error display needs.
    pub fn messages(&self) -> BTreeMap<&'static str, String> {
        self.0
            .iter()
            .map(|(field, e)| (field.as_str(), e.message.clone()))
            .collect()
    }
}

impl FromIterator<FieldError> for FieldErrors {
    fn from_iter<I: IntoIterator<Item = FieldError>>(iter: I) -> Self {
        let mut errors = Self::new();
        for e in iter {
            errors.insert(e);
        }
        errors
    }
}
