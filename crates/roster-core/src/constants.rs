/// Roster system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Date format accepted for `expiryBy` (HTML date input value).
pub const EXPIRY_DATE_FORMAT: &str = "%Y-%m-%d";

/// Email shape accepted by the form.
pub const EMAIL_PATTERN: &str = r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,4}$";

/// Message shown in the user table when the list is empty.
pub const EMPTY_TABLE_MESSAGE: &str = "No Users Available";

/// Header of the per-row action column.
pub const ACTIONS_COLUMN: &str = "Actions";

/// Label of the per-row delete action.
pub const REMOVE_ACTION_LABEL: &str = "Remove User";
