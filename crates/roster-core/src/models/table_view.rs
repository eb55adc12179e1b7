use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Render model for the user list table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TableView {
    /// Column headers, left to right.
    pub columns: Vec<String>,
    pub rows: Vec<TableRow>,
    /// Set only when there are no rows.
    pub empty_message: Option<String>,
}

/// One rendered record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TableRow {
    /// Position in the list; the delete action targets this index.
    pub index: usize,
    pub record_id: String,
    /// Cell text for every data column, in column order.
    pub cells: Vec<String>,
    /// Labels of the per-row actions.
    pub actions: Vec<String>,
}
