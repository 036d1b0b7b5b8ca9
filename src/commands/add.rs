use crate::api::PhonebookStore;
use crate::core::config::Config;
use crate::core::validate::validate;
use console::style;

/// Add one entry from command-line values.
pub fn run(config: &Config, name: &str, phone: &str) -> Result<(), String> {
    validate(name).map_err(|e| format!("name: {}", e))?;
    validate(phone).map_err(|e| format!("phoneNumber: {}", e))?;

    let store = PhonebookStore::open(&config.database).map_err(|e| e.to_string())?;
    store.ensure_schema().map_err(|e| e.to_string())?;

    let id = store.insert(name.as_bytes(), phone.as_bytes()).map_err(|e| e.to_string())?;
    println!("INSERT: {}", id);
    log::debug!(
        "{} entries stored",
        store.count().map_err(|e| e.to_string())?
    );
    eprintln!(
        "{} saved {} as entry {}",
        style("•").green().bold(),
        style(name).yellow(),
        id
    );
    Ok(())
}
