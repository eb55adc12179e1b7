pub mod choices;
pub mod form;
pub mod user_record;

pub use choices::{Supervisor, UserRole};
pub use form::{FieldName, RawForm};
pub use user_record::{UserDraft, UserRecord};
