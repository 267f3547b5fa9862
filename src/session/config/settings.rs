use std::path::{Path, PathBuf};

use config::{Environment, Map};
use serde::Deserialize;

use crate::lib::{
    errors::SettingsError,
    paths::{
        is_nonempty_absolute, DEFAULT_ANCHOR, DEFAULT_OUTPUT_PATH, DEFAULT_STARTX_PATH,
        DEFAULT_TEMPLATE_PATH,
    },
};

/// Prefix of environment variables overriding the fixed launcher paths.
pub const ENV_PREFIX: &str = "SXSSION";

/// Fixed locations used for a session launch, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LauncherSettings {
    /// Default xinitrc copied up to the anchor.
    pub template_path: PathBuf,
    /// Generated xinitrc, truncated on every launch.
    pub output_path: PathBuf,
    /// Exact template line replaced by the desktop commands.
    pub anchor: String,
    /// Program exec'd with the generated xinitrc.
    pub startx_path: PathBuf,
}

impl Default for LauncherSettings {
    fn default() -> Self {
        Self {
            template_path: PathBuf::from(DEFAULT_TEMPLATE_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            anchor: DEFAULT_ANCHOR.to_string(),
            startx_path: PathBuf::from(DEFAULT_STARTX_PATH),
        }
    }
}

impl LauncherSettings {
    /// Load defaults, then apply `SXSSION_*` variables from the process environment.
    pub fn load() -> Result<Self, SettingsError> {
        Self::from_environment(Environment::with_prefix(ENV_PREFIX))
    }

    /// Load defaults, then apply overrides from an explicit variable map.
    pub fn load_from_vars<I, K, V>(vars: I) -> Result<Self, SettingsError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let source: Map<String, String> = vars
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        Self::from_environment(Environment::with_prefix(ENV_PREFIX).source(Some(source)))
    }

    fn from_environment(environment: Environment) -> Result<Self, SettingsError> {
        let settings: Self = config::Config::builder()
            .set_default("template_path", DEFAULT_TEMPLATE_PATH)?
            .set_default("output_path", DEFAULT_OUTPUT_PATH)?
            .set_default("anchor", DEFAULT_ANCHOR)?
            .set_default("startx_path", DEFAULT_STARTX_PATH)?
            .add_source(environment)
            .build()?
            .try_deserialize()?;

        require_absolute("template_path", &settings.template_path)?;
        require_absolute("output_path", &settings.output_path)?;
        require_absolute("startx_path", &settings.startx_path)?;
        Ok(settings)
    }
}

fn require_absolute(field: &'static str, path: &Path) -> Result<(), SettingsError> {
    if is_nonempty_absolute(path) {
        return Ok(());
    }
    Err(SettingsError::RelativePath {
        field,
        path: path.to_path_buf(),
    })
}
