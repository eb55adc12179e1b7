use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::RosterError;

/// The nine form fields, declared in form order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    FirstName,
    LastName,
    Email,
    UserRole,
    Status,
    ExpiryBy,
    MobileNumber,
    PaymentLimit,
    Supervisor,
}

impl FieldName {
    pub const COUNT: usize = 9;

    /// All fields in form order.
    pub const ALL: [FieldName; 9] = [
        Self::FirstName,
        Self::LastName,
        Self::Email,
        Self::UserRole,
        Self::Status,
        Self::ExpiryBy,
        Self::MobileNumber,
        Self::PaymentLimit,
        Self::Supervisor,
    ];

    /// Wire name used by the form and in JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::UserRole => "userRole",
            Self::Status => "status",
            Self::ExpiryBy => "expiryBy",
            Self::MobileNumber => "mobileNumber",
            Self::PaymentLimit => "paymentLimit",
            Self::Supervisor => "supervisor",
        }
    }

    /// Display label, also used as the table column header.
    pub fn label(&self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Email => "Email Address",
            Self::UserRole => "User Role",
            Self::Status => "Status",
            Self::ExpiryBy => "Expiry By",
            Self::MobileNumber => "Mobile Number",
            Self::PaymentLimit => "Payment Limit",
            Self::Supervisor => "Supervisor",
        }
    }

    pub fn required_message(&self) -> &'static str {
        match self {
            Self::FirstName => "First Name is required",
            Self::LastName => "Last Name is required",
            Self::Email => "Email is required",
            Self::UserRole => "User Role is required",
            Self::Status => "Status is required",
            Self::ExpiryBy => "Expiry date is required",
            Self::MobileNumber => "Mobile Number is required",
            Self::PaymentLimit => "Payment Limit is required",
            Self::Supervisor => "Supervisor is required",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| RosterError::UnknownField { name: s.to_string() })
    }
}

/// Raw, unvalidated field values exactly as the form holds them.
///
/// Missing fields read as the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RawForm(BTreeMap<FieldName, String>);

impl RawForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter.
    pub fn with(mut self, field: FieldName, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: FieldName, value: impl Into<String>) {
        self.0.insert(field, value.into());
    }

    /// Value of a field, or `""` when it was never set.
    pub fn get(&self, field: FieldName) -> &str {
        self.0.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(|v| v.is_empty())
    }

    /// Build from wire-name pairs, rejecting names outside the catalogue.
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self, RosterError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut form = Self::new();
        for (name, value) in pairs {
            form.set(name.parse()?, value);
        }
        Ok(form)
    }

    /// Build from a JSON object. Strings are taken as-is, numbers are
    /// stringified, `null` reads as empty. Booleans, arrays and objects are
    /// rejected.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, RosterError> {
        let object = value.as_object().ok_or_else(|| {
            RosterError::SerializationError(serde::de::Error::custom(
                "form payload must be a JSON object",
            ))
        })?;
        let mut form = Self::new();
        for (name, v) in object {
            let field: FieldName = name.parse()?;
            let text = match v {
                serde_json::Value::String(s) => s.clone(),
                serde_json::Value::Number(n) => n.to_string(),
                serde_json::Value::Null => String::new(),
                _ => {
                    return Err(RosterError::SerializationError(serde::de::Error::custom(
                        format!("field {name} must be a string, number or null"),
                    )))
                }
            };
            form.set(field, text);
        }
        Ok(form)
    }
}
