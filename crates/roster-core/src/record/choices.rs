use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Fixed set of assignable roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Role1,
    Role2,
    Role3,
}

impl UserRole {
    pub const ALL: [UserRole; 3] = [Self::Role1, Self::Role2, Self::Role3];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Role1 => "role1",
            Self::Role2 => "role2",
            Self::Role3 => "role3",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Role1 => "Role 1",
            Self::Role2 => "Role 2",
            Self::Role3 => "Role 3",
        }
    }

    /// Exact match on the option value; anything else is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == value)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fixed set of supervisors a user can report to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Supervisor {
    Sup1,
    Sup2,
    Sup3,
}

impl Supervisor {
    pub const ALL: [Supervisor; 3] = [Self::Sup1, Self::Sup2, Self::Sup3];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sup1 => "sup1",
            Self::Sup2 => "sup2",
            Self::Sup3 => "sup3",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Sup1 => "Supervisor 1",
            Self::Sup2 => "Supervisor 2",
            Self::Sup3 => "Supervisor 3",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

impl fmt::Display for Supervisor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
