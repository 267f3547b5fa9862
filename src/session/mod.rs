//! Desktop selection, xinitrc splicing, and session handoff.
pub mod config;
pub mod launcher;
pub mod runtime;
pub mod selector;
pub mod splice;

pub use launcher::{Launcher, StartxLauncher};
pub use runtime::{run_session, RuntimeExit, HELP_HINT};
pub use selector::{PreparedSession, SessionMode, SessionOutcome, SessionSelector};
pub use splice::{splice, SpliceReport, SpliceRequest};
