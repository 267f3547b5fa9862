//! Load and validate the desktops file and the launcher settings.
use std::{collections::BTreeMap, path::Path};

use serde_json::Value;
use tracing::{debug, info};

use crate::lib::{errors::ConfigError, fs::read_config_file};

pub mod settings;
pub mod telemetry;

pub use settings::{LauncherSettings, ENV_PREFIX};

/// Desktop name mapped to the commands appended to the generated xinitrc.
///
/// Names iterate in lexicographic order. Command strings are written to the
/// script as-is; the desktops file is trusted and nothing is escaped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DesktopConfig {
    desktops: BTreeMap<String, Vec<String>>,
}

impl DesktopConfig {
    /// Read and validate the desktops file at `path`.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        info!(
            target: "sxssion::config",
            path = %path.display(),
            "Starting configuration load"
        );

        let config = read_config_file(path)
            .and_then(|raw| validate(&raw))
            .map_err(|err| {
                debug!(
                    target: "sxssion::config",
                    path = %path.display(),
                    reason = %err,
                    "Failed to load desktops file"
                );
                err
            })?;

        telemetry::log_loaded(path, &config);
        Ok(config)
    }

    /// Configured desktop names in iteration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.desktops.keys().map(String::as_str)
    }

    /// Commands for `name`, if configured.
    pub fn commands(&self, name: &str) -> Option<&[String]> {
        self.desktops.get(name).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.desktops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.desktops.is_empty()
    }
}

/// Parse `raw` as JSON and accept only an object whose values are arrays of strings.
///
/// Every shape problem collapses into [`ConfigError::SchemaViolation`]; the
/// offending key is not reported.
pub fn validate(raw: &str) -> Result<DesktopConfig, ConfigError> {
    let document: Value = serde_json::from_str(raw).map_err(ConfigError::Malformed)?;
    let Value::Object(entries) = document else {
        return Err(ConfigError::SchemaViolation);
    };

    let mut desktops = BTreeMap::new();
    for (name, value) in entries {
        let Value::Array(items) = value else {
            return Err(ConfigError::SchemaViolation);
        };
        let commands = items
            .into_iter()
            .map(|item| match item {
                Value::String(command) => Ok(command),
                _ => Err(ConfigError::SchemaViolation),
            })
            .collect::<Result<Vec<_>, _>>()?;
        desktops.insert(name, commands);
    }

    Ok(DesktopConfig { desktops })
}
