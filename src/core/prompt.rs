//! Line-oriented prompting on arbitrary reader/writer pairs.

use super::utils::trim_line_ending;
use super::validate::validate_bytes;
use crate::api::ValidationError;
use std::io::{self, BufRead, Write};

/// Writes `<label>>>` and reads one validated line.
///
/// The outer `Result` carries failures writing the prompt; the inner one
/// carries the validation outcome. A closed or unreadable input stream reads
/// as an empty line. The accepted line is returned as raw bytes without its
/// line ending, so input that is not UTF-8 is kept unchanged. There is no
/// retry here.
pub fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> io::Result<Result<Vec<u8>, ValidationError>> {
    write!(output, "{}>>", label)?;
    output.flush()?;

    let mut line = Vec::new();
    if input.read_until(b'\n', &mut line).is_err() {
        line.clear();
    }
    trim_line_ending(&mut line);

    Ok(validate_bytes(&line).map(|()| line))
}
