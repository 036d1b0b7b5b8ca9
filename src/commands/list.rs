use crate::api::{write_table, PhonebookStore};
use crate::core::config::Config;
use std::io;

/// Print every stored entry.
pub fn run(config: &Config) -> Result<(), String> {
    let store = PhonebookStore::open(&config.database).map_err(|e| e.to_string())?;
    store.ensure_schema().map_err(|e| e.to_string())?;

    log::debug!("listing {} entries", store.count().map_err(|e| e.to_string())?);
    write_table(&mut io::stdout().lock(), &store).map_err(|e| e.to_string())
}
