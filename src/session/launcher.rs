//! Hand the generated xinitrc over to the session starter.

use std::{
    path::{Path, PathBuf},
    process::Command,
};

use crate::lib::errors::LauncherError;

/// Replaces the current process with a session using `script`.
///
/// Implementations only return when the handoff could not be started; on
/// success control never comes back to the caller.
pub trait Launcher {
    fn exec_session(&self, script: &Path) -> LauncherError;
}

/// Execs `startx <script>` in place of the current process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartxLauncher {
    program: PathBuf,
}

impl StartxLauncher {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Build the command: argv[0] is the program's file name, argv[1] the script.
    pub fn command(&self, script: &Path) -> Command {
        let mut command = Command::new(&self.program);
        command.arg(script);
        set_arg0(&mut command, &self.program);
        command
    }
}

#[cfg(unix)]
fn set_arg0(command: &mut Command, program: &Path) {
    use std::os::unix::process::CommandExt;

    if let Some(name) = program.file_name() {
        command.arg0(name);
    }
}

#[cfg(not(unix))]
fn set_arg0(_command: &mut Command, _program: &Path) {}

impl Launcher for StartxLauncher {
    #[cfg(unix)]
    fn exec_session(&self, script: &Path) -> LauncherError {
        use std::os::unix::process::CommandExt;

        let source = self.command(script).exec();
        LauncherError::CouldNotStart {
            program: self.program.clone(),
            source,
        }
    }

    #[cfg(not(unix))]
    fn exec_session(&self, _script: &Path) -> LauncherError {
        LauncherError::CouldNotStart {
            program: self.program.clone(),
            source: std::io::Error::new(
                std::io::ErrorKind::Unsupported,
                "process replacement requires a Unix platform",
            ),
        }
    }
}
