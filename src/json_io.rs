//! Reading and writing UTF-8 JSON files.

use crate::error::FileError;
use serde::Serialize;
use serde_json::Value;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Read and parse a JSON document.
///
/// A missing file is reported as [`FileError::NotFound`] before any attempt
/// to open it.
pub fn read_json(path: &Path) -> Result<Value, FileError> {
    if !path.exists() {
        return Err(FileError::NotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path).map_err(|source| FileError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| FileError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Serialize with two-space indentation. Non-ASCII characters are emitted
/// literally.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String, FileError> {
    let mut json = serde_json::to_string_pretty(value).map_err(FileError::Serialize)?;
    json.push('\n');
    Ok(json)
}

/// Write already-serialized JSON to `path`, creating parent directories.
///
/// The content goes to a sibling `.tmp` file first and is renamed into
/// place, so `path` either holds the complete document or is left as it was.
pub fn write_json_string(path: &Path, json: &str) -> Result<(), FileError> {
    let write_error = |source| FileError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_error)?;
    }

    let tmp = staging_path(path);
    if let Err(e) = fs::write(&tmp, json).and_then(|_| fs::rename(&tmp, path)) {
        let _ = fs::remove_file(&tmp);
        return Err(write_error(e));
    }
    Ok(())
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Serialize `value` and write it to `path`.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), FileError> {
    let json = to_pretty_json(value)?;
    write_json_string(path, &json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_read_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = read_json(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, FileError::NotFound(_)));
    }

    #[test]
    fn test_read_malformed_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{\"name\": ").unwrap();

        let err = read_json(&path).unwrap_err();
        assert!(matches!(err, FileError::Parse { .. }));
    }

    #[test]
    fn test_write_creates_directories_and_keeps_unicode() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("es").join("teams.json");

        write_json(&path, &json!({"name": "Ángeles de la Muerte"})).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, "{\n  \"name\": \"Ángeles de la Muerte\"\n}\n");
        assert_eq!(read_json(&path).unwrap()["name"], "Ángeles de la Muerte");
    }

    #[test]
    fn test_write_replaces_existing_file_without_leftovers() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("teams.json");
        fs::write(&path, "{\"name\": \"old\", \"padding\": \"xxxxxxxxxxxxxxxx\"}").unwrap();

        write_json(&path, &json!({"name": "new"})).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "{\n  \"name\": \"new\"\n}\n");
        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_failed_write_keeps_previous_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("teams.json");
        fs::write(&path, "{}").unwrap();
        // A directory squatting on the staging name makes the write fail
        fs::create_dir(dir.path().join("teams.json.tmp")).unwrap();

        let err = write_json(&path, &json!({"name": "new"})).unwrap_err();

        assert!(matches!(err, FileError::Write { .. }));
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    }

    #[test]
    fn test_write_into_unwritable_location() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let err = write_json(&blocker.join("out.json"), &json!({})).unwrap_err();
        assert!(matches!(err, FileError::Write { .. }));
    }
}
