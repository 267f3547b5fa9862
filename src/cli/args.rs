//! CLI argument definitions and `LaunchProfile` construction.
use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;

use super::{resolve_config_path, LaunchProfile, CONFIG_HELP};
use crate::session::SessionMode;

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "sxssion",
    version,
    about = "Starts an Xorg session with the specified environment.",
    long_about = None,
    after_help = CONFIG_HELP
)]
pub struct SessionArgs {
    /// Specify alternate config file.
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    pub config_override: Option<PathBuf>,
    /// List the configured desktops instead of starting one.
    #[arg(short, long, default_value_t = false)]
    pub list: bool,
    /// Desktop to start.
    #[arg(value_name = "DESKTOP")]
    pub desktop: Option<String>,
}

impl SessionArgs {
    /// Resolve the config path and pick the session mode.
    ///
    /// `--list` wins over a positional desktop, which is then ignored.
    pub fn into_profile(self) -> Result<LaunchProfile> {
        let mode = match (self.list, self.desktop) {
            (true, _) => SessionMode::ListKeys,
            (false, Some(desktop)) => SessionMode::Launch(desktop),
            (false, None) => bail!("Expected exactly one positional argument."),
        };
        let config_path = resolve_config_path(self.config_override)?;

        Ok(LaunchProfile { config_path, mode })
    }
}
