//! Shared library modules providing error types, path constants, file checks, and telemetry initialization.

pub mod errors;
pub mod fs;
pub mod paths;
pub mod telemetry;
