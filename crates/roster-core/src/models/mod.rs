mod dialog_state;
mod form_options;
mod session_event;
mod table_view;

pub use dialog_state::DialogState;
pub use form_options::{ChoiceOption, FormOptions};
pub use session_event::SessionEvent;
pub use table_view::{TableRow, TableView};
