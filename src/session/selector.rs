//! Choose between listing desktops and preparing one for launch.

use std::path::PathBuf;

use tracing::info;

use super::{
    config::{DesktopConfig, LauncherSettings},
    splice::{splice, SpliceRequest},
};
use crate::lib::errors::SelectorError;

/// What a single invocation does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionMode {
    ListKeys,
    Launch(String),
}

/// A desktop whose script has been written and is ready to hand off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedSession {
    pub desktop: String,
    pub script_path: PathBuf,
    pub commands: usize,
}

/// Terminal result of [`SessionSelector::select`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Desktop names in [`DesktopConfig::names`] order.
    Listed(Vec<String>),
    Prepared(PreparedSession),
}

pub struct SessionSelector<'a> {
    config: &'a DesktopConfig,
    settings: &'a LauncherSettings,
}

impl<'a> SessionSelector<'a> {
    pub fn new(config: &'a DesktopConfig, settings: &'a LauncherSettings) -> Self {
        Self { config, settings }
    }

    /// Run exactly one branch for `mode`.
    ///
    /// Listing touches no files. Launching an unknown desktop fails before
    /// the output script is opened.
    pub fn select(&self, mode: &SessionMode) -> Result<SessionOutcome, SelectorError> {
        match mode {
            SessionMode::ListKeys => Ok(SessionOutcome::Listed(
                self.config.names().map(str::to_string).collect(),
            )),
            SessionMode::Launch(desktop) => self.prepare(desktop).map(SessionOutcome::Prepared),
        }
    }

    fn prepare(&self, desktop: &str) -> Result<PreparedSession, SelectorError> {
        let commands = self
            .config
            .commands(desktop)
            .ok_or_else(|| SelectorError::UnknownDesktop(desktop.to_string()))?;

        info!(
            target: "sxssion::session",
            desktop,
            commands = commands.len(),
            "Preparing session script"
        );
        splice(&SpliceRequest {
            source: &self.settings.template_path,
            destination: &self.settings.output_path,
            anchor: &self.settings.anchor,
            commands,
        })?;

        Ok(PreparedSession {
            desktop: desktop.to_string(),
            script_path: self.settings.output_path.clone(),
            commands: commands.len(),
        })
    }
}
