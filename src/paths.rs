//! Install locations under the user's home and XDG data directories

use crate::common::{DESKTOP_ENTRY_NAME, LAUNCHER_NAME};
use crate::error::{Error, Result};
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallPaths {
    pub bin_dir: PathBuf,
    pub applications_dir: PathBuf,
}

impl InstallPaths {
    /// Resolve the install locations from `HOME` and `XDG_DATA_HOME`
    pub fn from_env() -> Result<Self> {
        Self::resolve(
            std::env::var_os("HOME").map(PathBuf::from),
            std::env::var_os("XDG_DATA_HOME"),
        )
    }

    pub fn resolve(home: Option<PathBuf>, xdg_data_home: Option<OsString>) -> Result<Self> {
        let home = home
            .filter(|h| !h.as_os_str().is_empty())
            .ok_or(Error::HomeNotSet)?;
        // XDG base directories must be absolute, anything else is ignored
        let data_dir = xdg_data_home
            .map(PathBuf::from)
            .filter(|p| p.is_absolute())
            .unwrap_or_else(|| home.join(".local/share"));
        log::debug!("Home directory: {}", home.display());
        log::debug!("Data directory: {}", data_dir.display());
        Ok(InstallPaths {
            bin_dir: home.join(".local/bin"),
            applications_dir: data_dir.join("applications"),
        })
    }

    /// The launcher script started by the desktop entry
    pub fn launcher(&self) -> PathBuf {
        self.bin_dir.join(LAUNCHER_NAME)
    }

    pub fn desktop_entry(&self) -> PathBuf {
        self.applications_dir.join(DESKTOP_ENTRY_NAME)
    }

    /// Every file written by an install
    pub fn installed_files(&self) -> [PathBuf; 2] {
        [self.launcher(), self.desktop_entry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_local_share() {
        let paths = InstallPaths::resolve(Some("/home/user".into()), None).unwrap();
        assert_eq!(paths.bin_dir, PathBuf::from("/home/user/.local/bin"));
        assert_eq!(
            paths.applications_dir,
            PathBuf::from("/home/user/.local/share/applications")
        );
        assert_eq!(paths.launcher(), PathBuf::from("/home/user/.local/bin/discord-web"));
        assert_eq!(
            paths.desktop_entry(),
            PathBuf::from("/home/user/.local/share/applications/Discord Web.desktop")
        );
    }

    #[test]
    fn honours_xdg_data_home() {
        let paths =
            InstallPaths::resolve(Some("/home/user".into()), Some("/data".into())).unwrap();
        assert_eq!(paths.applications_dir, PathBuf::from("/data/applications"));
        assert_eq!(paths.bin_dir, PathBuf::from("/home/user/.local/bin"));
    }

    #[test]
    fn ignores_empty_or_relative_xdg_data_home() {
        for value in ["", "relative/share"] {
            let paths =
                InstallPaths::resolve(Some("/home/user".into()), Some(value.into())).unwrap();
            assert_eq!(
                paths.applications_dir,
                PathBuf::from("/home/user/.local/share/applications")
            );
        }
    }

    #[test]
    fn home_is_required() {
        assert!(matches!(
            InstallPaths::resolve(None, None),
            Err(Error::HomeNotSet)
        ));
        assert!(matches!(
            InstallPaths::resolve(Some(PathBuf::new()), None),
            Err(Error::HomeNotSet)
        ));
    }
}
