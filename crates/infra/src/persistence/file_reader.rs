use std::{fs::File, io::Read, path::Path};

use checkpoints_shared_kernel::{InfraResult, InfrastructureError};

/// Convenience helpers for reading files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Open the file at `path`.
    pub fn open(path: &Path) -> InfraResult<File> {
        File::open(path).map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source })
    }

    /// Read the entire file as UTF-8 text.
    pub fn read_to_string(path: &Path) -> InfraResult<String> {
        let mut file = Self::open(path)?;
        let mut buf = String::new();
        file.read_to_string(&mut buf)
            .map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source })?;
        Ok(buf)
    }
}
