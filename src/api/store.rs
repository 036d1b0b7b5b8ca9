//! The SQLite-backed phonebook table.

use crate::core::utils::ensure_parent_dir;
use rusqlite::types::{FromSqlError, ToSqlOutput, Type, ValueRef};
use rusqlite::{params, Connection, Row, ToSql};
use std::borrow::Cow;
use std::path::Path;

use super::error::StoreError;

const CREATE_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS phonebook (
        id INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        phoneNumber TEXT NOT NULL
    );
";

/// A single phonebook record.
///
/// Text fields hold the bytes exactly as entered; they are only known to be
/// UTF-8 when they contain no multi-byte character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhonebookEntry {
    pub id: i64,
    pub name: Vec<u8>,
    pub phone_number: Vec<u8>,
}

impl PhonebookEntry {
    pub fn name_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.name)
    }

    pub fn phone_number_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.phone_number)
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: text_bytes(row, 1)?,
            phone_number: text_bytes(row, 2)?,
        })
    }
}

/// Binds raw bytes as a SQLite `TEXT` value without re-encoding them.
struct RawText<'a>(&'a [u8]);

impl ToSql for RawText<'_> {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::Borrowed(ValueRef::Text(self.0)))
    }
}

fn text_bytes(row: &Row<'_>, idx: usize) -> rusqlite::Result<Vec<u8>> {
    row.get_ref(idx)?
        .as_bytes()
        .map(<[u8]>::to_vec)
        .map_err(|e: FromSqlError| {
            rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e))
        })
}

/// Handle to the phonebook database.
///
/// One handle is opened at startup and passed to whoever needs it; nothing
/// here is global. The handle is `Send` but not `Sync`, so it is owned by a
/// single task at a time.
pub struct PhonebookStore {
    conn: Connection,
}

impl PhonebookStore {
    /// Opens the database file at `path`, creating it (and its parent
    /// directory) if absent. The schema is not touched; call
    /// [`ensure_schema`](Self::ensure_schema) afterwards.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        ensure_parent_dir(path)?;
        let conn = Connection::open(path)
            .map_err(|e| StoreError::Init(format!("{}: {}", path.display(), e)))?;
        log::info!("opened phonebook database at {}", path.display());
        Ok(Self { conn })
    }

    /// Opens a private in-memory database.
    pub fn in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory().map_err(|e| StoreError::Init(e.to_string()))?;
        Ok(Self { conn })
    }

    /// Creates the `phonebook` table if it does not exist yet.
    pub fn ensure_schema(&self) -> Result<(), StoreError> {
        self.conn.execute_batch(CREATE_TABLE)?;
        log::info!("phonebook schema ensured");
        Ok(())
    }

    /// Returns every row in storage order.
    pub fn list_all(&self) -> Result<Vec<PhonebookEntry>, StoreError> {
        let mut entries = Vec::new();
        self.for_each(|entry| {
            entries.push(entry);
            Ok(())
        })?;
        Ok(entries)
    }

    /// Hands each row to `visit` in storage order as the query yields it.
    /// Stops at the first error from either side.
    pub fn for_each<F>(&self, mut visit: F) -> Result<(), StoreError>
    where
        F: FnMut(PhonebookEntry) -> Result<(), StoreError>,
    {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, phoneNumber FROM phonebook")?;
        for entry in stmt.query_map([], PhonebookEntry::from_row)? {
            visit(entry?)?;
        }
        Ok(())
    }

    /// Appends a row and returns the id SQLite assigned to it.
    pub fn insert(&self, name: &[u8], phone_number: &[u8]) -> Result<i64, StoreError> {
        self.conn.execute(
            "INSERT INTO phonebook(name, phoneNumber) VALUES (?1, ?2)",
            params![RawText(name), RawText(phone_number)],
        )?;
        let id = self.conn.last_insert_rowid();
        log::debug!("inserted phonebook row {}", id);
        Ok(id)
    }

    /// Number of stored rows.
    pub fn count(&self) -> Result<u64, StoreError> {
        let n: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM phonebook", [], |row| row.get(0))?;
        Ok(n as u64)
    }
}
