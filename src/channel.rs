//! Chrome release channels
//!
//! See <https://www.chromium.org/getting-involved/chrome-release-channels/>

use clap::ValueEnum;
use enum_iterator::Sequence;
use std::fmt::{Display, Formatter};

/// A Chrome release channel, declared from most to least stable
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Sequence)]
pub enum ReleaseChannel {
    Stable,
    Beta,
    Dev,
    Canary,
}

impl ReleaseChannel {
    /// Channels in stability order, most stable first
    pub fn all() -> impl Iterator<Item = ReleaseChannel> {
        enum_iterator::all::<ReleaseChannel>()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReleaseChannel::Stable => "stable",
            ReleaseChannel::Beta => "beta",
            ReleaseChannel::Dev => "dev",
            ReleaseChannel::Canary => "canary",
        }
    }

    /// Name of the browser executable this channel installs onto PATH
    pub fn binary_name(&self) -> String {
        format!("google-chrome-{}", self.as_str())
    }
}

impl Display for ReleaseChannel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The channel requested on the command line
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, ValueEnum)]
pub enum ChannelSelection {
    /// Search for the most stable release installed on your system
    #[default]
    Auto,
    Stable,
    Beta,
    Dev,
    Canary,
}

impl ChannelSelection {
    /// The explicitly requested channel, `None` for `auto`
    pub fn channel(self) -> Option<ReleaseChannel> {
        match self {
            ChannelSelection::Auto => None,
            ChannelSelection::Stable => Some(ReleaseChannel::Stable),
            ChannelSelection::Beta => Some(ReleaseChannel::Beta),
            ChannelSelection::Dev => Some(ReleaseChannel::Dev),
            ChannelSelection::Canary => Some(ReleaseChannel::Canary),
        }
    }
}

impl From<ReleaseChannel> for ChannelSelection {
    fn from(value: ReleaseChannel) -> Self {
        match value {
            ReleaseChannel::Stable => ChannelSelection::Stable,
            ReleaseChannel::Beta => ChannelSelection::Beta,
            ReleaseChannel::Dev => ChannelSelection::Dev,
            ReleaseChannel::Canary => ChannelSelection::Canary,
        }
    }
}
