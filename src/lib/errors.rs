use std::{io, path::PathBuf};

use config::ConfigError as ConfigLoaderError;
use thiserror::Error;

/// Errors that can occur while loading or validating the desktops file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Nothing exists at the configured path.
    #[error("Config path '{path}' doesn't exist.")]
    Missing { path: PathBuf },
    /// The path exists but does not resolve to a regular file.
    #[error("Config path '{path}' is neither a regular file nor a link.")]
    NotAFile { path: PathBuf },
    /// The file could not be opened or read.
    #[error("Failed to open config at '{path}'")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The document is not syntactically valid JSON.
    #[error("Invalid config format.")]
    Malformed(#[source] serde_json::Error),
    /// The document is valid JSON but not an object of string arrays.
    #[error("Invalid config format.")]
    SchemaViolation,
}

/// Failures while splicing desktop commands into the xinitrc template.
#[derive(Debug, Error)]
pub enum SpliceError {
    #[error("Failed to open default xinitrc at '{path}'")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to open tmp xinitrc at '{path}' for writing")]
    DestUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("An error occurred reading '{path}'")]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to write to tmp file at '{path}'")]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to find line '{anchor}' to replace in the default xinitrc '{path}'")]
    AnchorNotFound { anchor: String, path: PathBuf },
}

/// Errors raised while resolving the requested session.
#[derive(Debug, Error)]
pub enum SelectorError {
    #[error("Desktop '{0}' isn't in the config file.")]
    UnknownDesktop(String),
    #[error(transparent)]
    Splice(#[from] SpliceError),
}

/// The session launcher could not be started.
#[derive(Debug, Error)]
pub enum LauncherError {
    #[error("Failed to start '{program}'")]
    CouldNotStart {
        program: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Errors while assembling startup settings from defaults and environment.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to load launcher settings")]
    Load {
        #[source]
        source: ConfigLoaderError,
    },
    #[error("Launcher setting `{field}` must be an absolute path, got '{path}'")]
    RelativePath { field: &'static str, path: PathBuf },
}

impl From<ConfigLoaderError> for SettingsError {
    fn from(source: ConfigLoaderError) -> Self {
        Self::Load { source }
    }
}
