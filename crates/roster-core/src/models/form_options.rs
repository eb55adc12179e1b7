use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::record::{FieldName, Supervisor, UserRole};

/// One `<option>` of a select field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChoiceOption {
    pub value: String,
    pub label: String,
}

/// Everything the presentation layer needs to lay out the entry form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FormOptions {
    /// `(wire name, label)` per field, in form order.
    pub fields: Vec<(String, String)>,
    pub user_roles: Vec<ChoiceOption>,
    pub supervisors: Vec<ChoiceOption>,
}

impl FormOptions {
    pub fn new() -> Self {
        Self {
            fields: FieldName::ALL
                .iter()
                .map(|f| (f.as_str().to_string(), f.label().to_string()))
                .collect(),
            user_roles: UserRole::ALL
                .iter()
                .map(|r| ChoiceOption {
                    value: r.as_str().to_string(),
                    label: r.label().to_string(),
                })
                .collect(),
            supervisors: Supervisor::ALL
                .iter()
                .map(|s| ChoiceOption {
                    value: s.as_str().to_string(),
                    label: s.label().to_string(),
                })
                .collect(),
        }
    }
}

impl Default for FormOptions {
    fn default() -> Self {
        Self::new()
    }
}
