//! Entry point for sxssion.
use std::{io, process::ExitCode};

use clap::Parser;
use sxssion::{
    cli::SessionArgs,
    lib::telemetry,
    session::{
        config::{telemetry::log_settings, LauncherSettings},
        run_session, RuntimeExit, StartxLauncher,
    },
};

fn main() -> ExitCode {
    match bootstrap() {
        Ok(_) => ExitCode::SUCCESS,
        Err(exit) => exit.report(),
    }
}

fn bootstrap() -> Result<(), RuntimeExit> {
    telemetry::init_tracing().map_err(RuntimeExit::from_error)?;
    let args = match SessionArgs::try_parse() {
        Ok(args) => args,
        // --help and --version exit 0; usage errors exit 1 like every other failure.
        Err(err) if !err.use_stderr() => {
            err.print().map_err(RuntimeExit::from_error)?;
            return Ok(());
        }
        Err(err) => return Err(RuntimeExit::from_error(err)),
    };
    let profile = args.into_profile().map_err(RuntimeExit::from_error)?;
    let settings = LauncherSettings::load().map_err(RuntimeExit::from_error)?;
    log_settings(&settings);

    let launcher = StartxLauncher::new(settings.startx_path.clone());
    run_session(&profile, &settings, &launcher, &mut io::stdout().lock())
}
