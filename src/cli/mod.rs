//! CLI entrypoint module structure.

pub mod args;
pub mod profile;

pub use args::SessionArgs;
pub use profile::{resolve_config_path, LaunchProfile};

/// Trailer of `--help` describing the desktops file.
pub const CONFIG_HELP: &str = "\
The json configuration file should contain an object of keys to
arrays of strings. The keys correspond to desktop names and the
arrays to commands for startx to execute.
The configuration file will by default be looked up in
'$XDG_CONFIG_HOME/sxssion/desktops.json', falling back to
'$HOME/.config/sxssion/desktops.json'.";
