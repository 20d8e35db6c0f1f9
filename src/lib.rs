//! Installs a desktop launcher that opens Discord's web client in a Chrome `--app` window

pub mod channel;
pub mod common;
pub mod detect;
pub mod error;
pub mod files;
pub mod install;
pub mod paths;
pub mod templates;
pub mod uninstall;

pub use error::{Error, Result};
