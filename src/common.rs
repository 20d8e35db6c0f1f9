//! Common constants and helper functions used by both the installer and uninstaller

use crate::error::Error;
use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

pub const APP_NAME: &str = "Discord Web";

/// File name of the launcher script placed in `~/.local/bin`
pub const LAUNCHER_NAME: &str = "discord-web";

pub const DESKTOP_ENTRY_NAME: &str = "Discord Web.desktop";

/// Theme icon referenced by the desktop entry
pub const ICON_NAME: &str = "discord";

pub const DEFAULT_APP_URL: &str = "https://app.discord.com/";

pub fn install_logger(debug: bool) -> anyhow::Result<()> {
    let filter = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let config = ConfigBuilder::default()
        .set_time_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();
    TermLogger::init(filter, config, TerminalMode::Stderr, ColorChoice::Auto)?;
    if debug {
        log::debug!("Debug logging enabled");
    }
    Ok(())
}

/// Log a failed run followed by its hint, then exit with the error's code
pub fn report_error(e: Error) -> ! {
    let code = e.exit_code();
    let hint = e.hint();
    log::error!("{:#}", anyhow::Error::new(e));
    if let Some(hint) = hint {
        log::info!("Hint: {}", hint);
    }
    std::process::exit(code);
}
