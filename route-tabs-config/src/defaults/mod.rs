//! Default value functions for configuration.
//!
//! Each sub-module groups related free functions used as
//! `#[serde(default = "crate::defaults::...")]` attributes on `Config` fields.
//! Everything is re-exported from this module.

mod layout;
mod misc;

// ── Layout chrome widths ───────────────────────────────────────────────────
pub use layout::{
    fixed_padding, header_width, initial_host_width, overflow_control_width,
    sidebar_collapsed_width, sidebar_width, tab_item_width,
};

// ── Miscellaneous ──────────────────────────────────────────────────────────
pub use misc::log_level;
