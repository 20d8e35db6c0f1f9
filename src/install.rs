use crate::channel::{ChannelSelection, ReleaseChannel};
use crate::common::DEFAULT_APP_URL;
use crate::detect::{check_release_channel, determine_release_channel, Locate};
use crate::error::{Error, Result};
use crate::files::{refresh_desktop, write_file, DESKTOP_ENTRY_MODE, LAUNCHER_MODE};
use crate::paths::InstallPaths;
use crate::templates::{desktop_entry, launch_script, parse_app_url};
use std::path::PathBuf;
use url::Url;

#[derive(Debug, Clone)]
pub struct InstallOptions {
    pub channel: ChannelSelection,
    /// Page opened in the app window
    pub url: Url,
    /// Describe every step without touching the disk
    pub dry_run: bool,
    /// Run `xdg-desktop-menu forceupdate` afterwards
    pub refresh_menu: bool,
}

impl Default for InstallOptions {
    fn default() -> Self {
        InstallOptions {
            channel: ChannelSelection::Auto,
            url: Url::parse(DEFAULT_APP_URL).expect("default URL is valid"),
            dry_run: false,
            refresh_menu: true,
        }
    }
}

impl InstallOptions {
    pub fn with_url(mut self, url: &str) -> Result<Self> {
        self.url = parse_app_url(url)?;
        Ok(self)
    }
}

/// What an install wrote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Installation {
    pub channel: ReleaseChannel,
    pub launcher: PathBuf,
    pub desktop_entry: PathBuf,
}

pub fn install(
    paths: &InstallPaths,
    locator: &dyn Locate,
    options: &InstallOptions,
) -> Result<Installation> {
    log::info!("Starting install");
    let channel = resolve_channel(locator, options)?;
    log::debug!("Release channel is {}", channel);

    let launcher = paths.launcher();
    log::info!("Writing launcher {}", launcher.display());
    write_file(
        &launcher,
        &launch_script(channel, &options.url),
        LAUNCHER_MODE,
        options.dry_run,
    )?;

    let entry = paths.desktop_entry();
    log::info!("Creating desktop entry {}", entry.display());
    write_file(
        &entry,
        &desktop_entry(&launcher),
        DESKTOP_ENTRY_MODE,
        options.dry_run,
    )?;

    if options.refresh_menu && !options.dry_run {
        if let Err(e) = refresh_desktop() {
            log::warn!("Failed to refresh desktop {:#}", e)
        }
    }

    log::info!("Completed install");
    Ok(Installation {
        channel,
        launcher,
        desktop_entry: entry,
    })
}

fn resolve_channel(locator: &dyn Locate, options: &InstallOptions) -> Result<ReleaseChannel> {
    match options.channel.channel() {
        None => {
            log::debug!("Release channel is set to 'auto'");
            if options.dry_run {
                log::debug!("Dry run: pretending channel stable is installed");
                return Ok(ReleaseChannel::Stable);
            }
            log::debug!("Determining which channel is installed...");
            determine_release_channel(locator).ok_or(Error::ChromeNotFound)
        }
        Some(channel) => {
            if check_release_channel(locator, channel) {
                Ok(channel)
            } else {
                Err(Error::ChannelNotInstalled(channel))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Only(Option<ReleaseChannel>);

    impl Locate for Only {
        fn locate(&self, program: &str) -> Option<PathBuf> {
            self.0
                .filter(|c| c.binary_name() == program)
                .map(|c| PathBuf::from("/opt/google").join(c.binary_name()))
        }
    }

    fn options(channel: ChannelSelection, dry_run: bool) -> InstallOptions {
        InstallOptions {
            channel,
            dry_run,
            refresh_menu: false,
            ..Default::default()
        }
    }

    #[test]
    fn auto_uses_detected_channel() {
        let found = resolve_channel(
            &Only(Some(ReleaseChannel::Dev)),
            &options(ChannelSelection::Auto, false),
        )
        .unwrap();
        assert_eq!(found, ReleaseChannel::Dev);
    }

    #[test]
    fn auto_without_chrome_fails() {
        let result = resolve_channel(&Only(None), &options(ChannelSelection::Auto, false));
        assert!(matches!(result, Err(Error::ChromeNotFound)));
    }

    #[test]
    fn dry_run_assumes_stable() {
        let found =
            resolve_channel(&Only(None), &options(ChannelSelection::Auto, true)).unwrap();
        assert_eq!(found, ReleaseChannel::Stable);
    }

    #[test]
    fn explicit_channel_must_be_installed() {
        let locator = Only(Some(ReleaseChannel::Stable));
        assert!(matches!(
            resolve_channel(&locator, &options(ChannelSelection::Beta, false)),
            Err(Error::ChannelNotInstalled(ReleaseChannel::Beta))
        ));
        assert_eq!(
            resolve_channel(&locator, &options(ChannelSelection::Stable, false)).unwrap(),
            ReleaseChannel::Stable
        );
    }

    #[test]
    fn custom_url_is_validated() {
        let opts = InstallOptions::default()
            .with_url("https://discord.com/app")
            .unwrap();
        assert_eq!(opts.url.as_str(), "https://discord.com/app");
        assert!(InstallOptions::default().with_url("ftp://x").is_err());
    }
}
