//! Contents of the launcher script and the desktop entry

use crate::channel::ReleaseChannel;
use crate::common::{APP_NAME, ICON_NAME};
use crate::error::{Error, Result};
use std::path::Path;
use url::Url;

/// Parse the URL opened in the app window, only http(s) is accepted
pub fn parse_app_url(input: &str) -> Result<Url> {
    let invalid = |reason: String| Error::InvalidUrl {
        url: input.to_string(),
        reason,
    };
    let url = Url::parse(input).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(invalid(format!("unsupported scheme {:?}", other))),
    }
}

pub fn launch_script(channel: ReleaseChannel, url: &Url) -> String {
    format!(
        "#!/bin/bash

{} --app={} --disable-infobars --disable-logging --start-maximized >/dev/null 2>&1 &
",
        channel.binary_name(),
        shell_quote(url.as_str())
    )
}

// https://specifications.freedesktop.org/desktop-entry-spec/latest/exec-variables.html
// Exec arguments containing spaces must be quoted, the Icon= line may contain spaces as is.

pub fn desktop_entry(launcher: &Path) -> String {
    format!(
        "[Desktop Entry]
Type=Application
Name={}
Comment=Discord in a Chrome app window
Exec={}
Icon={}
Terminal=false
Categories=Network;InstantMessaging;
",
        APP_NAME,
        exec_quote(&launcher.to_string_lossy()),
        ICON_NAME
    )
}

/// Single quote a word for bash
fn shell_quote(word: &str) -> String {
    format!("'{}'", word.replace('\'', r"'\''"))
}

/// Quote an Exec= argument, then apply the string value escape on top
fn exec_quote(arg: &str) -> String {
    let mut quoted = String::with_capacity(arg.len() + 2);
    quoted.push('"');
    for c in arg.chars() {
        match c {
            '"' | '`' | '$' | '\\' => {
                quoted.push('\\');
                quoted.push(c);
            }
            '%' => quoted.push_str("%%"),
            _ => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
        .replace('\\', r"\\")
        .replace('\n', r"\n")
        .replace('\t', r"\t")
        .replace('\r', r"\r")
}
