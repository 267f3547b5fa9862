//! Filesystem checks for the desktops file.

use std::{fs, io, path::Path};

use crate::lib::errors::ConfigError;

/// Ensure `path` exists and resolves to a regular file.
///
/// Symlinks are followed, so a link to a regular file is accepted.
pub fn ensure_config_file(path: &Path) -> Result<(), ConfigError> {
    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(ConfigError::Missing {
                path: path.to_path_buf(),
            })
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    if !metadata.is_file() {
        return Err(ConfigError::NotAFile {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

/// Read the desktops file after checking it is a regular file.
pub fn read_config_file(path: &Path) -> Result<String, ConfigError> {
    ensure_config_file(path)?;
    fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })
}
