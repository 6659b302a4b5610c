use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::PersistenceError;

pub const OUTPUT_FILE: &str = "scrapi.json";

/// Creates or truncates `path` and writes `data` verbatim.
pub fn write_result(path: &Path, data: &[u8]) -> Result<(), PersistenceError> {
    let mut file = File::create(path).map_err(|source| PersistenceError::Create {
        path: path.to_path_buf(),
        source,
    })?;

    file.write_all(data).map_err(|source| PersistenceError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(OUTPUT_FILE);
        fs::write(&path, "a much longer previous result").unwrap();

        write_result(&path, b"HELLO").unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"HELLO");
    }

    #[test]
    fn test_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join(OUTPUT_FILE);

        let err = write_result(&path, b"{}").unwrap_err();
        assert!(matches!(err, PersistenceError::Create { .. }));
    }
}
