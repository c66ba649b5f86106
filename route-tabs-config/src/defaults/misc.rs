//! Miscellaneous defaults.

use crate::types::LogLevel;

pub fn log_level() -> LogLevel {
    LogLevel::Off
}
