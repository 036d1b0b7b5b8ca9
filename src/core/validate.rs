//! Input validation for phonebook fields.

use crate::api::ValidationError;

/// Validates a field value.
pub fn validate(text: &str) -> Result<(), ValidationError> {
    validate_bytes(text.as_bytes())
}

/// Validates a raw line of input.
///
/// Empty input is rejected. Input that decodes as UTF-8 is rejected when it
/// holds any multi-byte character. Bytes that are not valid UTF-8 are not
/// rejected here.
pub fn validate_bytes(raw: &[u8]) -> Result<(), ValidationError> {
    if raw.is_empty() {
        return Err(ValidationError::EmptyInput);
    }
    if let Ok(text) = std::str::from_utf8(raw) {
        if text.chars().count() != raw.len() {
            return Err(ValidationError::NonAsciiInput);
        }
    }
    Ok(())
}
