use std::{fs, path::Path};

use crate::{error::IoError, record::RegistrationRecord};

/// Encode a registration record as a pretty-printed JSON document.
pub fn to_json_string(record: &RegistrationRecord) -> Result<String, IoError> {
    Ok(serde_json::to_string_pretty(record)?)
}

/// Decode and validate a registration record from a JSON document.
///
/// Unknown fields are ignored.
///
/// # Errors
///
/// Fails on malformed JSON, when the `type` field is not `Registration`, or
/// when an image descriptor has inconsistent dimensions.
pub fn from_json_str(json: &str) -> Result<RegistrationRecord, IoError> {
    let record: RegistrationRecord = serde_json::from_str(json)?;
    record.validate()?;
    Ok(record)
}

/// Write a registration record to a JSON file.
///
/// # Arguments
///
/// * `file_path` - The path to the JSON file, created or truncated.
/// * `record` - The record to write.
pub fn write_registration(
    file_path: impl AsRef<Path>,
    record: &RegistrationRecord,
) -> Result<(), IoError> {
    let file_path = file_path.as_ref();
    log::debug!(
        "writing {} registration to {}",
        record.transform.type_name(),
        file_path.display()
    );

    fs::write(file_path, to_json_string(record)?)?;
    Ok(())
}

/// Read a registration record from a JSON file.
///
/// # Arguments
///
/// * `file_path` - The path to the JSON file.
///
/// # Returns
///
/// The validated registration record.
pub fn read_registration(file_path: impl AsRef<Path>) -> Result<RegistrationRecord, IoError> {
    let file_path = file_path.as_ref();
    log::debug!("reading registration from {}", file_path.display());

    let json = fs::read_to_string(file_path)?;
    from_json_str(&json)
}
