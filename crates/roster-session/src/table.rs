//! Render model for the user table.

use roster_core::constants::{ACTIONS_COLUMN, EMPTY_TABLE_MESSAGE, REMOVE_ACTION_LABEL};
use roster_core::models::{TableRow, TableView};
use roster_core::{FieldName, UserRecord};

/// Header of the id column, which has no form field.
pub const USER_ID_COLUMN: &str = "User ID";

/// Field columns between the id column and the actions column.
const DATA_COLUMNS: [FieldName; 8] = [
    FieldName::Email,
    FieldName::FirstName,
    FieldName::LastName,
    FieldName::UserRole,
    FieldName::ExpiryBy,
    FieldName::MobileNumber,
    FieldName::PaymentLimit,
    FieldName::Supervisor,
];

/// Columns: Status, User ID, the data columns, Actions.
pub fn build_table_view(records: &[UserRecord]) -> TableView {
    let mut columns = Vec::with_capacity(DATA_COLUMNS.len() + 3);
    columns.push(FieldName::Status.label().to_string());
    columns.push(USER_ID_COLUMN.to_string());
    columns.extend(DATA_COLUMNS.iter().map(|f| f.label().to_string()));
    columns.push(ACTIONS_COLUMN.to_string());

    let rows: Vec<TableRow> = records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let mut cells = Vec::with_capacity(DATA_COLUMNS.len() + 2);
            cells.push(record.display_value(FieldName::Status));
            cells.push(record.id.clone());
            cells.extend(DATA_COLUMNS.iter().map(|f| record.display_value(*f)));
            TableRow {
                index,
                record_id: record.id.clone(),
                cells,
                actions: vec![REMOVE_ACTION_LABEL.to_string()],
            }
        })
        .collect();

    let empty_message = rows.is_empty().then(|| EMPTY_TABLE_MESSAGE.to_string());
    TableView {
        columns,
        rows,
        empty_message,
    }
}
