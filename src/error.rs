use crate::channel::ReleaseChannel;
use std::path::PathBuf;
use thiserror::Error;

/// `EX_UNAVAILABLE` from sysexits.h
pub const EXIT_UNAVAILABLE: i32 = 69;
pub const EXIT_FAILURE: i32 = 1;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unable to locate the home directory: HOME is not set")]
    HomeNotSet,
    #[error("Chrome does not seem to be installed on your system.")]
    ChromeNotFound,
    #[error("The release channel {0} does not seem to be installed on your system.")]
    ChannelNotInstalled(ReleaseChannel),
    #[error("Invalid app URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("{action} {}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn io(
        action: &'static str,
        path: impl Into<PathBuf>,
    ) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Error::Io {
            action,
            path,
            source,
        }
    }

    /// Follow-up advice to show after the error message
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Error::ChromeNotFound => Some("maybe it is installed, but not on PATH?"),
            Error::ChannelNotInstalled(_) => Some("try using --chrome-release-channel=auto"),
            Error::HomeNotSet => Some("set HOME to your home directory and try again"),
            Error::InvalidUrl { .. } => Some("the URL must be absolute and use http or https"),
            Error::Io { .. } => None,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            Error::ChromeNotFound | Error::ChannelNotInstalled(_) => EXIT_UNAVAILABLE,
            _ => EXIT_FAILURE,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_browser_is_unavailable() {
        assert_eq!(Error::ChromeNotFound.exit_code(), EXIT_UNAVAILABLE);
        assert_eq!(
            Error::ChannelNotInstalled(ReleaseChannel::Beta).exit_code(),
            EXIT_UNAVAILABLE
        );
        assert_eq!(Error::HomeNotSet.exit_code(), EXIT_FAILURE);
    }

    #[test]
    fn channel_error_names_channel_and_hints_auto() {
        let e = Error::ChannelNotInstalled(ReleaseChannel::Canary);
        assert_eq!(
            e.to_string(),
            "The release channel canary does not seem to be installed on your system."
        );
        assert_eq!(e.hint(), Some("try using --chrome-release-channel=auto"));
    }

    #[test]
    fn io_error_includes_path() {
        let e = Error::io("Writing desktop entry", "/tmp/x.desktop")(std::io::Error::from(
            std::io::ErrorKind::PermissionDenied,
        ));
        assert_eq!(e.to_string(), "Writing desktop entry /tmp/x.desktop");
        assert!(std::error::Error::source(&e).is_some());
    }
}
