use crate::config::cli::LocalStorage;
use crate::domain::model::RawRecord;
use crate::domain::ports::Storage;
use crate::utils::error::{GeneratorError, Result};
use std::io::ErrorKind;
use std::path::Path;

/// Reads `path` through `storage` and parses it as a JSON array of records.
///
/// A path that cannot be read becomes [`GeneratorError::FileNotFound`]; content
/// that is not a JSON array becomes [`GeneratorError::MalformedInput`].
pub fn load_records<S: Storage>(storage: &S, path: &str) -> Result<Vec<RawRecord>> {
    tracing::debug!("Reading records from {}", path);

    let bytes = storage.read_file(path).map_err(|e| match e {
        GeneratorError::IoError(io)
            if matches!(
                io.kind(),
                ErrorKind::NotFound | ErrorKind::PermissionDenied | ErrorKind::IsADirectory
            ) =>
        {
            GeneratorError::FileNotFound {
                path: path.to_string(),
            }
        }
        other => other,
    })?;

    let records: Vec<RawRecord> =
        serde_json::from_slice(&bytes).map_err(|e| GeneratorError::MalformedInput {
            path: path.to_string(),
            message: e.to_string(),
        })?;

    tracing::debug!("Loaded {} records ({} bytes)", records.len(), bytes.len());
    Ok(records)
}

/// Loads records straight from the filesystem.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<RawRecord>> {
    let path = path.as_ref().to_string_lossy();
    load_records(&LocalStorage::new(String::new()), &path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    struct MockStorage {
        files: RefCell<HashMap<String, Vec<u8>>>,
    }

    impl MockStorage {
        fn with_file(path: &str, content: &str) -> Self {
            let mut files = HashMap::new();
            files.insert(path.to_string(), content.as_bytes().to_vec());
            Self {
                files: RefCell::new(files),
            }
        }
    }

    impl Storage for MockStorage {
        fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            self.files.borrow().get(path).cloned().ok_or_else(|| {
                GeneratorError::IoError(std::io::Error::new(
                    ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            self.files
                .borrow_mut()
                .insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    #[test]
    fn test_load_records_in_file_order() {
        let storage = MockStorage::with_file(
            "animals_data.json",
            r#"[{"name": "Lion"}, {"name": "Fox", "extra": 1}, 42]"#,
        );

        let records = load_records(&storage, "animals_data.json").unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].data["name"], "Lion");
        assert_eq!(records[1].data["name"], "Fox");
        assert_eq!(records[2].data, serde_json::json!(42));
    }

    #[test]
    fn test_missing_file_is_file_not_found() {
        let storage = MockStorage::with_file("other.json", "[]");

        let err = load_records(&storage, "animals_data.json").unwrap_err();

        assert!(matches!(err, GeneratorError::FileNotFound { ref path } if path == "animals_data.json"));
    }

    struct UnreadableStorage(ErrorKind);

    impl Storage for UnreadableStorage {
        fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            Err(GeneratorError::IoError(std::io::Error::new(
                self.0,
                format!("cannot read {}", path),
            )))
        }

        fn write_file(&self, _path: &str, _data: &[u8]) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_permission_denied_is_file_not_found() {
        let storage = UnreadableStorage(ErrorKind::PermissionDenied);

        let err = load_records(&storage, "animals_data.json").unwrap_err();

        assert!(matches!(err, GeneratorError::FileNotFound { ref path } if path == "animals_data.json"));
    }

    #[test]
    fn test_other_read_errors_stay_unexpected() {
        let storage = UnreadableStorage(ErrorKind::Interrupted);

        let err = load_records(&storage, "animals_data.json").unwrap_err();

        assert_eq!(err.category(), crate::utils::error::ErrorCategory::Unexpected);
    }

    #[test]
    fn test_invalid_json_is_malformed() {
        let storage = MockStorage::with_file("animals_data.json", "{not valid json");

        let err = load_records(&storage, "animals_data.json").unwrap_err();

        assert!(matches!(err, GeneratorError::MalformedInput { .. }));
    }

    #[test]
    fn test_top_level_object_is_malformed() {
        let storage = MockStorage::with_file("animals_data.json", r#"{"name": "Lion"}"#);

        let err = load_records(&storage, "animals_data.json").unwrap_err();

        assert!(matches!(err, GeneratorError::MalformedInput { .. }));
    }

    #[test]
    fn test_truncated_array_is_malformed() {
        let storage = MockStorage::with_file("animals_data.json", r#"[{"name": "Lion"},"#);

        assert!(matches!(
            load_records(&storage, "animals_data.json"),
            Err(GeneratorError::MalformedInput { .. })
        ));
    }

    #[test]
    fn test_empty_array() {
        let storage = MockStorage::with_file("animals_data.json", "[]");

        assert!(load_records(&storage, "animals_data.json").unwrap().is_empty());
    }
}
