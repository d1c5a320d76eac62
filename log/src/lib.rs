use std::{fmt::Display, str::FromStr};

use backtrace::Backtrace;
use tracing::{debug, error, info, level_filters::LevelFilter, trace, warn};

/// Installs the global fmt subscriber. Fails if one is already installed.
pub fn init(display_level: &bool, level_filter: &str) -> Result<(), String> {
    let level_filter = LevelFilter::from_str(level_filter)
        .map_err(|err| format!("Invalid log level filter '{level_filter}': {err}"))?;

    tracing_subscriber::fmt()
        .with_level(*display_level)
        .with_max_level(level_filter)
        .with_target(false)
        .try_init()
        .map_err(|err| format!("Failed to install log subscriber: {err}"))
}

pub fn trace<T: Display>(prefix: Option<&str>, msg: T) {
    trace!("{} {msg}", prefix.unwrap_or("🐾"));
}

pub fn debug<T: Display>(prefix: Option<&str>, msg: T) {
    debug!("{} {msg}", prefix.unwrap_or("🐞"));
}

pub fn info<T: Display>(prefix: Option<&str>, msg: T) {
    info!("{} {msg}", prefix.unwrap_or("📢"));
}

pub fn warn<T: Display>(prefix: Option<&str>, msg: T) {
    warn!("{} {msg}", prefix.unwrap_or("⚠️"));
}

pub fn error<T: Display>(prefix: Option<&str>, msg: T) {
    let prefix = prefix.unwrap_or("🚨");
    if std::env::var("RUST_BACKTRACE").is_ok_and(|var| var == "1") {
        error!("{prefix} {msg}\n{:?}", Backtrace::new());
    } else {
        error!("{prefix} {msg}");
    }
}
