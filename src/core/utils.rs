use std::fs;
use std::io;
use std::path::Path;

/// Ensure the directory that will hold `path` exists.
pub fn ensure_parent_dir(path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() && !dir.exists() => fs::create_dir_all(dir),
        _ => Ok(()),
    }
}

/// Strip a trailing `\n` or `\r\n` from a raw line.
pub fn trim_line_ending(line: &mut Vec<u8>) {
    if line.last() == Some(&b'\n') {
        line.pop();
        if line.last() == Some(&b'\r') {
            line.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_missing_parent() {
        let tmp = tempfile::tempdir().unwrap();
        let db = tmp.path().join("nested").join("dir").join("phonebook.db");
        ensure_parent_dir(&db).unwrap();
        assert!(db.parent().unwrap().is_dir());
    }

    #[test]
    fn bare_file_name_needs_no_dir() {
        ensure_parent_dir(Path::new("phonebook.db")).unwrap();
    }

    #[test]
    fn trims_unix_and_windows_endings() {
        let mut unix = b"Carol\n".to_vec();
        trim_line_ending(&mut unix);
        assert_eq!(unix, b"Carol");

        let mut windows = b"Carol\r\n".to_vec();
        trim_line_ending(&mut windows);
        assert_eq!(windows, b"Carol");

        let mut bare = b"Carol".to_vec();
        trim_line_ending(&mut bare);
        assert_eq!(bare, b"Carol");
    }
}
