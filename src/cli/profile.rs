//! LaunchProfile and config path resolution.
use std::{env, path::PathBuf};

use anyhow::{anyhow, Context, Result};

use crate::{lib::paths::default_config_path_from, session::SessionMode};

const XDG_CONFIG_HOME_ENV: &str = "XDG_CONFIG_HOME";
const HOME_ENV: &str = "HOME";

/// Resolved invocation: which desktops file to read and what to do with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchProfile {
    pub config_path: PathBuf,
    pub mode: SessionMode,
}

/// Resolve config path in the order: CLI override → `$XDG_CONFIG_HOME` → `$HOME/.config`.
///
/// A relative override is taken from the current directory.
pub fn resolve_config_path(override_path: Option<PathBuf>) -> Result<PathBuf> {
    let path = match override_path {
        Some(path) => path,
        None => default_config_path_from(env::var_os(XDG_CONFIG_HOME_ENV), env::var_os(HOME_ENV))
            .map_err(|message| anyhow!(message))?,
    };

    if path.is_absolute() {
        return Ok(path);
    }

    let cwd = env::current_dir().context("failed to obtain current directory")?;
    Ok(cwd.join(path))
}
