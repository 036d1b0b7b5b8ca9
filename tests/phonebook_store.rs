//! End-to-end behaviour of the on-disk phonebook.

use phonebook::api::SEPARATOR;
use phonebook::{PhonebookStore, Session, SessionError};
use std::io::Cursor;
use tempfile::TempDir;

fn open(dir: &TempDir) -> PhonebookStore {
    let store = PhonebookStore::open(dir.path().join("phonebook.db")).unwrap();
    store.ensure_schema().unwrap();
    store
}

#[test]
fn entries_survive_reopening_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let alice = open(&dir).insert(b"Alice", b"12345").unwrap();

    let store = open(&dir);
    let bob = store.insert(b"Bob", b"67890").unwrap();
    assert!(bob > alice);

    let entries = store.list_all().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!((entries[0].id, entries[0].name.as_slice()), (alice, &b"Alice"[..]));
    assert_eq!((entries[1].id, entries[1].name.as_slice()), (bob, &b"Bob"[..]));
}

#[test]
fn ensure_schema_is_idempotent_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let store = open(&dir);
    store.insert(b"Alice", b"12345").unwrap();
    let before = store.list_all().unwrap();

    store.ensure_schema().unwrap();
    store.ensure_schema().unwrap();
    assert_eq!(store.list_all().unwrap(), before);
}

#[test]
fn database_directory_is_created() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data").join("phonebook.db");
    let store = PhonebookStore::open(&path).unwrap();
    store.ensure_schema().unwrap();
    assert!(path.exists());
}

#[test]
fn session_writes_rows_to_disk() {
    let dir = tempfile::tempdir().unwrap();
    let input = Cursor::new(b"Alice\n12345\n\nBob\n67890\n".to_vec());
    let mut output = Vec::new();

    let result = Session::new(open(&dir), input, &mut output)
        .max_attempts(Some(3))
        .run();
    assert!(matches!(result, Err(SessionError::TooManyAttempts { .. })));

    let text = String::from_utf8(output).unwrap();
    assert!(text.starts_with(SEPARATOR));
    assert!(text.contains("ID: 1 Name: Alice PhoneNumber: 12345\n"));
    assert!(text.contains("INSERT: 2\n"));
    assert_eq!(text.matches("Input Error: Unexpected Input.").count(), 4);

    let names: Vec<_> = open(&dir)
        .list_all()
        .unwrap()
        .into_iter()
        .map(|e| e.name)
        .collect();
    assert_eq!(names, [b"Alice".to_vec(), b"Bob".to_vec()]);
}

#[test]
fn malformed_input_survives_reopening() {
    let dir = tempfile::tempdir().unwrap();
    let mut input = vec![0xff, 0xfe, b'a', b'\n'];
    input.extend_from_slice(b"123\n");

    Session::new(open(&dir), Cursor::new(input), Vec::new())
        .step()
        .unwrap();

    let entries = open(&dir).list_all().unwrap();
    assert_eq!(entries[0].name, [0xff, 0xfe, b'a']);
    assert_eq!(entries[0].phone_number, b"123");
}
