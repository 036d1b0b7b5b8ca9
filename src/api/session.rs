//! The show-and-prompt loop driving an interactive phonebook session.

use std::io::{BufRead, Write};

use crate::core::prompt::prompt;

use super::{
    error::{SessionError, StoreError},
    store::{PhonebookEntry, PhonebookStore},
};

/// Line printed before and after the table listing.
pub const SEPARATOR: &str = "----------------------------------------------";

/// Writes one table row.
pub fn write_entry<W: Write>(output: &mut W, entry: &PhonebookEntry) -> std::io::Result<()> {
    writeln!(
        output,
        "ID: {} Name: {} PhoneNumber: {}",
        entry.id,
        entry.name_lossy(),
        entry.phone_number_lossy()
    )
}

/// Writes the table, streaming rows from the store.
///
/// The leading separator is written before the query runs, so a failing
/// query leaves exactly one separator behind.
pub fn write_table<W: Write>(output: &mut W, store: &PhonebookStore) -> Result<(), SessionError> {
    writeln!(output, "{}", SEPARATOR)?;
    output.flush()?;
    store.for_each(|entry| write_entry(&mut *output, &entry).map_err(StoreError::from))?;
    writeln!(output, "{}", SEPARATOR)?;
    output.flush()?;
    Ok(())
}

/// An interactive session over one store and one input/output pair.
///
/// The session owns the store for its whole lifetime.
pub struct Session<R, W> {
    store: PhonebookStore,
    input: R,
    output: W,
    max_attempts: Option<u32>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(store: PhonebookStore, input: R, output: W) -> Self {
        Self {
            store,
            input,
            output,
            max_attempts: None,
        }
    }

    /// Caps how many times a single field is asked for before giving up.
    /// `None` keeps asking forever.
    pub fn max_attempts(mut self, max_attempts: Option<u32>) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn store(&self) -> &PhonebookStore {
        &self.store
    }

    /// Ensures the schema, then repeats [`step`](Self::step) until an error.
    pub fn run(&mut self) -> Result<(), SessionError> {
        self.store.ensure_schema()?;
        loop {
            self.step()?;
        }
    }

    /// Shows the table, asks for one entry and inserts it.
    pub fn step(&mut self) -> Result<i64, SessionError> {
        write_table(&mut self.output, &self.store)?;

        let name = self.ask("name")?;
        let phone_number = self.ask("phoneNumber")?;

        let id = self.store.insert(&name, &phone_number)?;
        writeln!(self.output, "INSERT: {}", id)?;
        Ok(id)
    }

    /// Prompts for `label` until the input validates.
    fn ask(&mut self, label: &str) -> Result<Vec<u8>, SessionError> {
        let mut attempts = 0u32;
        loop {
            match prompt(&mut self.input, &mut self.output, label)? {
                Ok(value) => return Ok(value),
                Err(e) => {
                    writeln!(self.output, "{}", e)?;
                    attempts += 1;
                    if self.max_attempts.is_some_and(|max| attempts >= max) {
                        return Err(SessionError::TooManyAttempts {
                            field: label.to_string(),
                        });
                    }
                }
            }
        }
    }
}
