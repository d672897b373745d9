///
/// @package flagmask
///
/// @file Logger functions
/// @copyright 2025-present Christoph Kappel <christoph@unexist.dev>
/// @version $Id$
///
/// This program can be distributed under the terms of the GNU GPLv3.
/// See the file LICENSE for details.
///

use std::env;
use log::{debug, LevelFilter};
use anyhow::Result;
use stdext::function_name;

/// Environment variable to read the log level from
pub const ENV_LOGLEVEL: &str = "FLAGMASK_LOGLEVEL";

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum LogLevel {
    None,
    Info,
    Warnings,
    Error,
    Debug,
    Trace,
}

impl From<&str> for LogLevel {
    fn from(level: &str) -> Self {
        match level.to_lowercase().as_str() {
            "none" => LogLevel::None,
            "warnings" | "warn" => LogLevel::Warnings,
            "errors" | "error" => LogLevel::Error,
            "debug" => LogLevel::Debug,
            "trace" => LogLevel::Trace,
            _ => LogLevel::Info,
        }
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::None => LevelFilter::Off,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Warnings => LevelFilter::Warn,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Init logging for host programs and tests
///
/// # Arguments
///
/// * `level` - Log level to filter for
///
/// # Returns
///
/// A `Result` with either `Unit` on success or otherwise `Error`
pub fn init(level: LogLevel) -> Result<()> {
    let filter = LevelFilter::from(level);

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .filter_level(filter)
        .try_init()?;

    debug!("{}", function_name!());

    Ok(())
}

/// Init logging with the level from [`ENV_LOGLEVEL`]
///
/// # Returns
///
/// A `Result` with either `Unit` on success or otherwise `Error`
pub fn init_from_env() -> Result<()> {
    let level = env::var(ENV_LOGLEVEL)
        .map_or(LogLevel::Info, |level| LogLevel::from(level.as_str()));

    init(level)
}
