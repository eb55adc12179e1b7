use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Visibility of the entry dialog. `Closed` is both initial and terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum DialogState {
    #[default]
    Closed,
    Open,
}

impl DialogState {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }
}
