//! Telemetry initialization and structured session events.

use std::path::Path;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Filter used when `RUST_LOG` is unset; keeps normal runs quiet.
const DEFAULT_FILTER: &str = "warn";

/// Initialize `tracing` and format developer logs on stderr.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_file(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

/// Record the handoff to the session launcher right before `exec`.
pub fn emit_handoff(desktop: &str, script: &Path, commands: usize) {
    info!(
        target: "sxssion::session",
        desktop,
        script = %script.display(),
        commands,
        "Handing off to session launcher"
    );
}
