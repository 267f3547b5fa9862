//! Fixed filesystem locations and config path resolution.

use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

/// System-wide default xinitrc used as the splice template.
pub const DEFAULT_TEMPLATE_PATH: &str = "/etc/X11/xinit/xinitrc";
/// Location of the generated xinitrc handed to `startx`.
pub const DEFAULT_OUTPUT_PATH: &str = "/tmp/sxssion-tmp-xinitrc-7NeVeIYBH08OiJuwl5D4";
/// Template line from which the default session is replaced.
pub const DEFAULT_ANCHOR: &str = "$twm &";
/// Program receiving the generated xinitrc.
pub const DEFAULT_STARTX_PATH: &str = "/usr/bin/startx";

/// Directory name under the user's config directory.
pub const CONFIG_DIR_NAME: &str = "sxssion";
/// File name of the desktops mapping.
pub const CONFIG_FILE_NAME: &str = "desktops.json";

/// Resolve the default desktops file from explicit environment values.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/sxssion/desktops.json` when `XDG_CONFIG_HOME` is set and non-empty.
/// 2. `$HOME/.config/sxssion/desktops.json` otherwise.
pub fn default_config_path_from(
    xdg_config_home: Option<OsString>,
    home: Option<OsString>,
) -> Result<PathBuf, &'static str> {
    let base = match (xdg_config_home, home) {
        (Some(xdg), _) if !xdg.is_empty() => PathBuf::from(xdg),
        (_, Some(home)) if !home.is_empty() => PathBuf::from(home).join(".config"),
        _ => return Err("XDG_CONFIG_HOME and HOME are both unset"),
    };

    Ok(base.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Returns true if the path is non-empty and absolute.
pub fn is_nonempty_absolute(path: &Path) -> bool {
    !path.as_os_str().is_empty() && path.is_absolute()
}
