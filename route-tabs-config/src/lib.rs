//! Configuration system for the route-tabs tab strip.
//!
//! This crate provides configuration loading, saving, and default values
//! for the tab strip. It includes:
//!
//! - Layout chrome widths (sidebar, header, overflow control, tab item)
//! - Logging level selection
//! - YAML persistence with XDG-style path resolution

pub mod config;
pub mod defaults;
mod error;
mod types;

pub use config::{Config, MAX_WIDTH_PX};
pub use error::ConfigError;
pub use types::LogLevel;
