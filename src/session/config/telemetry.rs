use std::path::Path;

use tracing::{debug, info};

use super::{DesktopConfig, LauncherSettings};

pub fn log_loaded(path: &Path, config: &DesktopConfig) {
    info!(
        target: "sxssion::config",
        path = %path.display(),
        desktops = config.len(),
        "Desktops file loaded successfully"
    );
}

pub fn log_settings(settings: &LauncherSettings) {
    debug!(
        target: "sxssion::config",
        template_path = %settings.template_path.display(),
        output_path = %settings.output_path.display(),
        anchor = %settings.anchor,
        startx_path = %settings.startx_path.display(),
        "Resolved launcher settings"
    );
}
