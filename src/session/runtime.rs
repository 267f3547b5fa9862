use std::{io::Write, process::ExitCode};

use anyhow::{Context, Error};

use crate::{
    cli::LaunchProfile,
    lib::telemetry,
    session::{
        config::{DesktopConfig, LauncherSettings},
        launcher::Launcher,
        selector::{SessionOutcome, SessionSelector},
    },
};

/// Printed after every diagnostic.
pub const HELP_HINT: &str = "Run `sxssion --help` for more info.";

/// Bundles a terminal error message with the process exit code.
#[derive(Debug)]
pub struct RuntimeExit {
    message: String,
    exit_code: ExitCode,
}

impl RuntimeExit {
    pub fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        Self {
            message: format!("{err:#}"),
            exit_code: ExitCode::FAILURE,
        }
    }

    /// Write the diagnostic and the help hint to stderr.
    pub fn report(self) -> ExitCode {
        eprintln!("{}", self.message);
        eprintln!("{HELP_HINT}");
        self.exit_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Load the desktops file and run the selected mode.
///
/// List mode writes one name per line to `out`. Launch mode only returns
/// when the launcher fails to start.
pub fn run_session(
    profile: &LaunchProfile,
    settings: &LauncherSettings,
    launcher: &dyn Launcher,
    out: &mut dyn Write,
) -> Result<(), RuntimeExit> {
    let config =
        DesktopConfig::load_from_path(&profile.config_path).map_err(RuntimeExit::from_error)?;
    let outcome = SessionSelector::new(&config, settings)
        .select(&profile.mode)
        .map_err(RuntimeExit::from_error)?;

    match outcome {
        SessionOutcome::Listed(names) => {
            for name in names {
                writeln!(out, "{name}")
                    .context("failed to write desktop list")
                    .map_err(RuntimeExit::from_error)?;
            }
            Ok(())
        }
        SessionOutcome::Prepared(session) => {
            telemetry::emit_handoff(&session.desktop, &session.script_path, session.commands);
            Err(RuntimeExit::from_error(
                launcher.exec_session(&session.script_path),
            ))
        }
    }
}
