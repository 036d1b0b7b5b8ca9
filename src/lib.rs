pub mod api;
pub mod cli;
pub mod commands;
pub mod core;

pub use api::{PhonebookEntry, PhonebookStore, Session, SessionError, StoreError, ValidationError};
