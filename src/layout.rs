//! Width-driven layout for the tab strip.
//!
//! The strip shares its row with a sidebar, a collapsed sidebar rail and a
//! header. Whatever is left is the container; the overflow dropdown takes a
//! fixed slice of it and the rest is filled with fixed-width tab items.
//!
//! ```text
//! |<-------------------------- host width ------------------------------>|
//! | sidebar | rail | header | [tab][tab][tab]...   [▾] | pad |
//!                           |<------ container ------->|
//! ```
//!
//! Everything here is a pure function of its inputs.

use route_tabs_config::Config;
use serde::Serialize;

/// Fixed chrome widths that do not change while the shell is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutMetrics {
    pub sidebar_collapsed_width: i32,
    pub header_width: i32,
    pub fixed_padding: i32,
    pub overflow_control_width: i32,
    pub item_width: i32,
}

impl LayoutMetrics {
    /// Build a full layout input from the metrics and the values that vary
    /// at runtime.
    pub fn input(&self, host_width: i32, sidebar_width: i32, open_tab_count: usize) -> LayoutInput {
        LayoutInput {
            available_host_width: host_width,
            sidebar_width,
            sidebar_collapsed_width: self.sidebar_collapsed_width,
            header_width: self.header_width,
            fixed_padding: self.fixed_padding,
            overflow_control_width: self.overflow_control_width,
            item_width: self.item_width,
            open_tab_count,
        }
    }
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for LayoutMetrics {
    fn from(config: &Config) -> Self {
        Self {
            sidebar_collapsed_width: config.sidebar_collapsed_width,
            header_width: config.header_width,
            fixed_padding: config.fixed_padding,
            overflow_control_width: config.overflow_control_width,
            item_width: config.tab_item_width,
        }
    }
}

/// Every input of [`compute_layout`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutInput {
    pub available_host_width: i32,
    pub sidebar_width: i32,
    pub sidebar_collapsed_width: i32,
    pub header_width: i32,
    pub fixed_padding: i32,
    pub overflow_control_width: i32,
    pub item_width: i32,
    pub open_tab_count: usize,
}

/// Outcome of a layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LayoutResult {
    /// Number of leading tabs that fit in the strip, never more than the
    /// number of open tabs.
    pub max_visible_count: usize,
    /// Container width to report to the host. May be negative when the
    /// viewport is too narrow for the surrounding chrome.
    pub reported_container_width_px: i32,
}

impl LayoutResult {
    /// True if the reported width cannot hold the strip at all.
    pub fn is_undersized(&self) -> bool {
        self.reported_container_width_px <= 0
    }
}

/// Compute how many tabs fit and the container width to report upward.
pub fn compute_layout(input: &LayoutInput) -> LayoutResult {
    // Widened so extreme inputs cannot overflow
    let container_width = i64::from(input.available_host_width)
        - i64::from(input.sidebar_width)
        - i64::from(input.sidebar_collapsed_width)
        - i64::from(input.header_width)
        - i64::from(input.fixed_padding);
    let usable_width = container_width - i64::from(input.overflow_control_width);

    let fitting = if input.item_width > 0 {
        usable_width.div_euclid(i64::from(input.item_width))
    } else {
        0
    };
    let max_visible_count = usize::try_from(fitting)
        .unwrap_or(0)
        .min(input.open_tab_count);

    LayoutResult {
        max_visible_count,
        reported_container_width_px: saturate(container_width),
    }
}

fn saturate(width: i64) -> i32 {
    i32::try_from(width).unwrap_or(if width < 0 { i32::MIN } else { i32::MAX })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(host_width: i32, open_tab_count: usize) -> LayoutInput {
        LayoutMetrics::default().input(host_width, 256, open_tab_count)
    }

    #[test]
    fn wide_host_shows_every_tab() {
        let result = compute_layout(&input(1200, 5));
        assert_eq!(result.reported_container_width_px, 694);
        // floor(656 / 96) = 6, clamped to the 5 open tabs
        assert_eq!(result.max_visible_count, 5);
    }

    #[test]
    fn narrow_host_collapses_tabs() {
        let result = compute_layout(&input(700, 5));
        assert_eq!(result.reported_container_width_px, 194);
        assert_eq!(result.max_visible_count, 1);
    }

    #[test]
    fn negative_container_width_is_reported() {
        let result = compute_layout(&input(300, 3));
        assert_eq!(result.reported_container_width_px, 300 - 256 - 68 - 180 - 2);
        assert_eq!(result.max_visible_count, 0);
        assert!(result.is_undersized());
    }

    #[test]
    fn usable_width_between_zero_and_one_item_floors_to_zero() {
        // usable width of exactly 95px
        let host = 95 + 38 + 256 + 68 + 180 + 2;
        let result = compute_layout(&input(host, 4));
        assert_eq!(result.max_visible_count, 0);
        let result = compute_layout(&input(host + 1, 4));
        assert_eq!(result.max_visible_count, 1);
    }

    #[test]
    fn non_positive_item_width_fits_nothing() {
        let mut layout_input = input(1600, 4);
        layout_input.item_width = 0;
        assert_eq!(compute_layout(&layout_input).max_visible_count, 0);
        layout_input.item_width = -10;
        assert_eq!(compute_layout(&layout_input).max_visible_count, 0);
    }

    #[test]
    fn extreme_widths_saturate_instead_of_overflowing() {
        let result = compute_layout(&input(i32::MIN, 3));
        assert_eq!(result.reported_container_width_px, i32::MIN);
        assert_eq!(result.max_visible_count, 0);

        let mut wide = input(i32::MAX, 3);
        wide.sidebar_width = i32::MIN;
        let result = compute_layout(&wide);
        assert_eq!(result.reported_container_width_px, i32::MAX);
        assert_eq!(result.max_visible_count, 3);

        let mut chrome = input(1200, 3);
        chrome.header_width = i32::MAX;
        let result = compute_layout(&chrome);
        assert_eq!(
            i64::from(result.reported_container_width_px),
            1200 - 256 - 68 - i64::from(i32::MAX) - 2
        );
        assert!(result.is_undersized());
    }

    #[test]
    fn no_open_tabs_means_nothing_visible() {
        let result = compute_layout(&input(4000, 0));
        assert_eq!(result.max_visible_count, 0);
    }

    #[test]
    fn identical_inputs_give_identical_results() {
        let layout_input = input(1024, 7);
        assert_eq!(compute_layout(&layout_input), compute_layout(&layout_input));
    }

    #[test]
    fn visible_count_never_decreases_as_host_grows() {
        let mut previous = 0;
        for host in (0..3000).step_by(7) {
            let count = compute_layout(&input(host, 12)).max_visible_count;
            assert!(count >= previous, "host {host}: {count} < {previous}");
            previous = count;
        }
        assert_eq!(previous, 12);
    }

    #[test]
    fn metrics_follow_config() {
        let config = Config {
            tab_item_width: 120,
            header_width: 0,
            ..Config::default()
        };
        let metrics = LayoutMetrics::from(&config);
        assert_eq!(metrics.item_width, 120);
        assert_eq!(metrics.header_width, 0);
        assert_eq!(metrics.overflow_control_width, 38);
    }
}
