use std::fs;
use std::path::Path;

use crate::error::EditError;

/// Read file contents.
pub fn read_file(path: &Path) -> Result<Vec<u8>, EditError> {
    fs::read(path).map_err(|e| EditError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Write file contents. The parent directory must already exist.
pub fn write_file(path: &Path, data: &[u8]) -> Result<(), EditError> {
    fs::write(path, data).map_err(|e| EditError::WriteFile {
        path: path.to_path_buf(),
        source: e,
    })
}
