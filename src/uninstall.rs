use crate::error::Result;
use crate::files::{refresh_desktop, remove_file_if_exists};
use crate::paths::InstallPaths;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct UninstallOptions {
    pub dry_run: bool,
    pub refresh_menu: bool,
}

impl Default for UninstallOptions {
    fn default() -> Self {
        UninstallOptions {
            dry_run: false,
            refresh_menu: true,
        }
    }
}

/// Removes the launcher and desktop entry, returning the files that were present
pub fn uninstall(paths: &InstallPaths, options: &UninstallOptions) -> Result<Vec<PathBuf>> {
    log::info!("Starting uninstall");
    let mut removed = vec![];
    for file in paths.installed_files() {
        if remove_file_if_exists(&file, options.dry_run)? {
            removed.push(file);
        }
    }
    if removed.is_empty() {
        log::info!("Nothing was installed");
    }

    if options.refresh_menu && !options.dry_run {
        if let Err(e) = refresh_desktop() {
            log::warn!("Failed to refresh desktop {:#}", e)
        }
    }

    log::info!("Completed uninstall");
    Ok(removed)
}
