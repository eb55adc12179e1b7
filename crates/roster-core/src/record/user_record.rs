use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::choices::{Supervisor, UserRole};
use super::form::FieldName;
use crate::constants::EXPIRY_DATE_FORMAT;

/// A record that passed every field rule but has no id yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct UserDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub user_role: UserRole,
    pub status: String,
    pub expiry_by: NaiveDate,
    /// ASCII digits only.
    pub mobile_number: String,
    pub payment_limit: f64,
    pub supervisor: Supervisor,
}

impl UserDraft {
    /// Attach an id, producing the stored form of the record.
    pub fn into_record(self, id: String) -> UserRecord {
        UserRecord {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            user_role: self.user_role,
            status: self.status,
            expiry_by: self.expiry_by,
            mobile_number: self.mobile_number,
            payment_limit: self.payment_limit,
            supervisor: self.supervisor,
        }
    }
}

/// One accepted user entry held in the list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Assigned once at creation, never changed.
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub user_role: UserRole,
    pub status: String,
    pub expiry_by: NaiveDate,
    pub mobile_number: String,
    pub payment_limit: f64,
    pub supervisor: Supervisor,
}

impl UserRecord {
    /// Display text of one field, as a table cell shows it.
    pub fn display_value(&self, field: FieldName) -> String {
        match field {
            FieldName::FirstName => self.first_name.clone(),
            FieldName::LastName => self.last_name.clone(),
            FieldName::Email => self.email.clone(),
            FieldName::UserRole => self.user_role.as_str().to_string(),
            FieldName::Status => self.status.clone(),
            FieldName::ExpiryBy => self.expiry_by.format(EXPIRY_DATE_FORMAT).to_string(),
            FieldName::MobileNumber => self.mobile_number.clone(),
            FieldName::PaymentLimit => self.payment_limit.to_string(),
            FieldName::Supervisor => self.supervisor.as_str().to_string(),
        }
    }
}
