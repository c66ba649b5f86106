//! Core `Config` struct definition.
//!
//! - [`persistence`] — `load_from` / `save_to` and path resolution

mod persistence;

use crate::error::ConfigError;
use crate::types::LogLevel;
use serde::{Deserialize, Serialize};

/// Tab strip configuration.
///
/// All widths are in CSS pixels. Missing fields fall back to their defaults so
/// that partial YAML files remain valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    // ========================================================================
    // Layout chrome
    // ========================================================================
    /// Width of the expanded navigation sidebar
    #[serde(default = "crate::defaults::sidebar_width")]
    pub sidebar_width: i32,

    /// Width of the collapsed sidebar rail (always subtracted)
    #[serde(default = "crate::defaults::sidebar_collapsed_width")]
    pub sidebar_collapsed_width: i32,

    /// Width of the header area sharing the row with the tab strip
    #[serde(default = "crate::defaults::header_width")]
    pub header_width: i32,

    /// Extra pixels subtracted from the container width
    #[serde(default = "crate::defaults::fixed_padding")]
    pub fixed_padding: i32,

    /// Width of the overflow dropdown control
    #[serde(default = "crate::defaults::overflow_control_width")]
    pub overflow_control_width: i32,

    /// Width of a single tab item
    #[serde(default = "crate::defaults::tab_item_width")]
    pub tab_item_width: i32,

    /// Host width assumed until the first resize notification arrives
    #[serde(default = "crate::defaults::initial_host_width")]
    pub initial_host_width: i32,

    // ========================================================================
    // Debug Logging
    // ========================================================================
    /// Log verbosity
    #[serde(default = "crate::defaults::log_level")]
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sidebar_width: crate::defaults::sidebar_width(),
            sidebar_collapsed_width: crate::defaults::sidebar_collapsed_width(),
            header_width: crate::defaults::header_width(),
            fixed_padding: crate::defaults::fixed_padding(),
            overflow_control_width: crate::defaults::overflow_control_width(),
            tab_item_width: crate::defaults::tab_item_width(),
            initial_host_width: crate::defaults::initial_host_width(),
            log_level: crate::defaults::log_level(),
        }
    }
}

/// Largest width any config field may hold
pub const MAX_WIDTH_PX: i32 = 100_000;

impl Config {
    /// Check field values that serde cannot reject on its own.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tab_item_width <= 0 {
            return Err(ConfigError::Validation(format!(
                "tab_item_width must be positive, got {}",
                self.tab_item_width
            )));
        }
        if self.tab_item_width > MAX_WIDTH_PX {
            return Err(ConfigError::Validation(format!(
                "tab_item_width must be at most {MAX_WIDTH_PX}, got {}",
                self.tab_item_width
            )));
        }

        let chrome = [
            ("sidebar_width", self.sidebar_width),
            ("sidebar_collapsed_width", self.sidebar_collapsed_width),
            ("header_width", self.header_width),
            ("fixed_padding", self.fixed_padding),
            ("overflow_control_width", self.overflow_control_width),
            ("initial_host_width", self.initial_host_width),
        ];
        for (name, value) in chrome {
            if value < 0 {
                return Err(ConfigError::Validation(format!(
                    "{name} must not be negative, got {value}"
                )));
            }
            if value > MAX_WIDTH_PX {
                return Err(ConfigError::Validation(format!(
                    "{name} must be at most {MAX_WIDTH_PX}, got {value}"
                )));
            }
        }

        Ok(())
    }
}
