//! Persistence API, the interactive session and error types.

mod error;
mod session;
mod store;

pub use error::{SessionError, StoreError, ValidationError};
pub use session::{write_entry, write_table, Session, SEPARATOR};
pub use store::{PhonebookEntry, PhonebookStore};
