//! Detection of the Chrome release channels installed on PATH

use crate::channel::ReleaseChannel;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Finds an executable by name, like `command -v`
pub trait Locate {
    fn locate(&self, program: &str) -> Option<PathBuf>;
}

/// Searches the directories of a `PATH` style list
#[derive(Debug, Clone)]
pub struct PathSearch {
    path: OsString,
}

impl PathSearch {
    pub fn new(path: impl Into<OsString>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_env() -> Self {
        Self::new(std::env::var_os("PATH").unwrap_or_default())
    }
}

impl Locate for PathSearch {
    fn locate(&self, program: &str) -> Option<PathBuf> {
        std::env::split_paths(&self.path)
            .filter(|dir| !dir.as_os_str().is_empty())
            .map(|dir| dir.join(program))
            .find(|candidate| is_executable(candidate))
    }
}

cfg_if::cfg_if! {
    if #[cfg(unix)] {
        fn is_executable(path: &Path) -> bool {
            use nix::unistd::{access, AccessFlags};
            path.is_file() && access(path, AccessFlags::X_OK).is_ok()
        }
    } else {
        fn is_executable(path: &Path) -> bool {
            path.is_file()
        }
    }
}

/// Check if the release channel is installed on the system
pub fn check_release_channel(locator: &dyn Locate, channel: ReleaseChannel) -> bool {
    let binary = channel.binary_name();
    log::debug!("Checking channel {}: looking for {}", channel, binary);
    match locator.locate(&binary) {
        Some(path) => {
            log::debug!("Found {}", path.display());
            true
        }
        None => false,
    }
}

/// Look for the most stable release channel installed on the system
pub fn determine_release_channel(locator: &dyn Locate) -> Option<ReleaseChannel> {
    let found = ReleaseChannel::all().find(|c| check_release_channel(locator, *c));
    match found {
        Some(c) => log::debug!("Channel {} is installed", c),
        None => log::debug!("No channel was found to be installed"),
    }
    found
}
