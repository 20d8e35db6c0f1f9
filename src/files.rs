//! File system helpers shared by install and uninstall

use crate::error::{Error, Result};
use anyhow::Context;
use std::io::Write;
use std::path::Path;
use std::process::Command;
use tempfile::NamedTempFile;

pub const LAUNCHER_MODE: u32 = 0o755;
pub const DESKTOP_ENTRY_MODE: u32 = 0o644;

/// Log a file's path and its indented contents
fn print_file(path: &Path, contents: &str) {
    log::debug!("{}:", path.display());
    for line in contents.lines() {
        log::debug!("    {}", line);
    }
}

/// Atomically replace `path` with `contents`, creating its folder if needed
pub fn write_file(path: &Path, contents: &str, mode: u32, dry_run: bool) -> Result<()> {
    print_file(path, contents);
    if dry_run {
        log::debug!("Dry run: not writing {}", path.display());
        return Ok(());
    }
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(parent).map_err(Error::io("Ensuring folder exists", parent))?;
    let mut file = NamedTempFile::new_in(parent).map_err(Error::io("Creating file in", parent))?;
    file.write_all(contents.as_bytes())
        .map_err(Error::io("Writing", file.path()))?;
    set_mode(&file, mode)?;
    file.persist(path)
        .map_err(|e| Error::io("Replacing", path)(e.error))?;
    Ok(())
}

#[cfg(unix)]
fn set_mode(file: &NamedTempFile, mode: u32) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.as_file()
        .set_permissions(std::fs::Permissions::from_mode(mode))
        .map_err(Error::io("Setting permissions of", file.path()))
}

#[cfg(not(unix))]
fn set_mode(_file: &NamedTempFile, _mode: u32) -> Result<()> {
    Ok(())
}

/// Remove a file, returning false when it was already absent
pub fn remove_file_if_exists(path: &Path, dry_run: bool) -> Result<bool> {
    if dry_run {
        let exists = path.is_file();
        log::debug!(
            "Dry run: not removing {} ({})",
            path.display(),
            if exists { "present" } else { "absent" }
        );
        return Ok(exists);
    }
    match std::fs::remove_file(path) {
        Ok(()) => {
            log::info!("Removed file {}", path.display());
            Ok(true)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log::debug!("{} is not present", path.display());
            Ok(false)
        }
        Err(e) => Err(Error::io("Removing", path)(e)),
    }
}

pub fn refresh_desktop() -> anyhow::Result<()> {
    log::info!("Refreshing desktop");
    let output = Command::new("xdg-desktop-menu")
        .arg("forceupdate")
        .output()
        .context("Running xdg-desktop-menu")?;
    if !output.status.success() {
        let std_err = std::str::from_utf8(&output.stderr)?;
        anyhow::bail!("{}", std_err.trim());
    }
    Ok(())
}
