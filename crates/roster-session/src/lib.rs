//! # roster-session
//!
//! The stateful half of the Roster form: the record list, the entry dialog
//! flag, and the session that turns UI events into state changes.
//!
//! - `controller` — `RecordListController`, the single owner of the list and dialog state
//! - `id` — record id generators
//! - `session` — `RosterSession`, the application context the presentation layer talks to
//! - `table` — render model for the user table

pub mod controller;
pub mod id;
pub mod session;
pub mod table;

pub use controller::RecordListController;
pub use id::{RandomIdGenerator, SequentialIdGenerator};
pub use session::{FormEvent, RosterSession, SessionSnapshot};
pub use table::build_table_view;
