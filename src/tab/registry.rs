//! Tab registry: the ordered set of open tabs and their selection

use super::{RouteEvent, Tab};
use crate::layout::{LayoutMetrics, LayoutResult, compute_layout};
use crate::traits::{HostLayout, Navigator, ShellHost};
use route_tabs_config::Config;
use serde::Serialize;

/// Where the selected tab currently sits in the strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "area", content = "index", rename_all = "snake_case")]
pub enum Placement {
    /// Shown in the strip at this index
    Visible(usize),
    /// Listed in the overflow menu at this index
    Collapsed(usize),
}

/// Owns the open tabs of one shell.
///
/// Tabs are kept in the order they were opened. Exactly one tab is selected
/// whenever the registry is non-empty, and the registry never closes its
/// last tab. The visible/collapsed split is always a prefix/suffix of the
/// ordered tabs.
#[derive(Debug, Clone)]
pub struct TabRegistry {
    /// All open tabs, in display order
    tabs: Vec<Tab>,
    /// Index of the selected tab
    current_index: Option<usize>,
    /// Index of the tab whose close affordance is shown
    hovered_index: Option<usize>,
    /// Length of the visible prefix from the last layout pass
    visible_count: usize,
    is_overflowing: bool,
    /// Current sidebar width, pushed in by the host
    sidebar_width: i32,
    metrics: LayoutMetrics,
    last_layout: Option<LayoutResult>,
}

impl TabRegistry {
    /// Create an empty registry
    pub fn new(metrics: LayoutMetrics, sidebar_width: i32) -> Self {
        Self {
            tabs: Vec::new(),
            current_index: None,
            hovered_index: None,
            visible_count: 0,
            is_overflowing: false,
            sidebar_width,
            metrics,
            last_layout: None,
        }
    }

    /// Create an empty registry using the widths from `config`
    pub fn from_config(config: &Config) -> Self {
        Self::new(LayoutMetrics::from(config), config.sidebar_width)
    }

    /// Open a tab for the route, or select it if it is already open.
    ///
    /// Also pushes the route's title to the host and re-runs the layout.
    pub fn on_route_changed<H: ShellHost>(&mut self, event: &RouteEvent, host: &mut H) {
        host.set_title(&event.title);

        let index = match self.position_of(&event.url) {
            Some(idx) => {
                log::debug!("Route '{}' already open at index {}", event.url, idx);
                idx
            }
            None => {
                self.tabs
                    .push(Tab::new(event.title.clone(), event.url.clone()));
                log::info!(
                    "Opened tab '{}' for {} (total: {})",
                    event.title,
                    event.url,
                    self.tabs.len()
                );
                self.tabs.len() - 1
            }
        };

        self.select_only(index);
        self.recompute_visibility(host);
    }

    /// Select the tab at `index` and ask the host to navigate to it.
    ///
    /// Out-of-range indices are ignored. Returns true if a tab was selected.
    pub fn select_tab<H: Navigator>(&mut self, index: usize, host: &mut H) -> bool {
        let Some(tab) = self.tabs.get(index) else {
            log::debug!(
                "Ignoring selection of index {} (tabs: {})",
                index,
                self.tabs.len()
            );
            return false;
        };
        let route_key = tab.route_key.clone();

        self.select_only(index);
        log::debug!("Selected tab {} ({})", index, route_key);
        host.navigate(&route_key);
        true
    }

    /// Close the tab for `route_key`.
    ///
    /// The last remaining tab and unknown route keys are left alone. The
    /// closed tab's cached view is evicted before anything else reaches the
    /// host. When the closed tab was selected, its left neighbour (or, for
    /// the first tab, its right neighbour) becomes selected and the host is
    /// asked to navigate there.
    ///
    /// Returns the closed tab.
    pub fn close_tab<H: ShellHost>(
        &mut self,
        route_key: &str,
        was_selected: bool,
        host: &mut H,
    ) -> Option<Tab> {
        if self.tabs.len() <= 1 {
            log::debug!("Refusing to close '{}': it is the last tab", route_key);
            return None;
        }
        let Some(index) = self.position_of(route_key) else {
            log::warn!("Close requested for unknown tab '{}'", route_key);
            return None;
        };

        let closed = self.tabs.remove(index);
        log::info!(
            "Closed tab '{}' (index {}, remaining: {})",
            route_key,
            index,
            self.tabs.len()
        );
        host.evict(route_key);
        self.clear_hover();

        // The caller's flag can be stale; the tab's own flag also counts.
        if was_selected || closed.is_selected {
            let next = index.checked_sub(1).unwrap_or(index);
            self.select_only(next);
            if let Some(tab) = self.tabs.get(next) {
                let next_key = tab.route_key.clone();
                log::debug!("Selection moved to '{}' (index {})", next_key, next);
                host.navigate(&next_key);
            }
        } else {
            self.current_index = self.tabs.iter().position(|t| t.is_selected);
        }

        self.recompute_visibility(host);
        Some(closed)
    }

    /// Re-run the layout and split the tabs into visible and collapsed.
    ///
    /// Reports the container width to the host exactly once.
    pub fn recompute_visibility<H: HostLayout>(&mut self, host: &mut H) -> LayoutResult {
        let input = self
            .metrics
            .input(host.available_width(), self.sidebar_width, self.tabs.len());
        let result = compute_layout(&input);

        self.visible_count = result.max_visible_count;
        self.is_overflowing = !self.collapsed_tabs().is_empty();
        self.last_layout = Some(result);
        host.apply_container_width(result.reported_container_width_px);

        if result.is_undersized() {
            log::warn!(
                "Tab container width is {}px at host width {}px",
                result.reported_container_width_px,
                input.available_host_width
            );
        }
        log::debug!(
            "Layout: {} of {} tabs visible, container {}px",
            self.visible_count,
            self.tabs.len(),
            result.reported_container_width_px
        );
        result
    }

    /// Host viewport changed size
    pub fn on_resize<H: HostLayout>(&mut self, host: &mut H) -> LayoutResult {
        self.recompute_visibility(host)
    }

    /// Sidebar was expanded, collapsed or dragged to a new width
    pub fn on_sidebar_resized<H: HostLayout>(&mut self, width: i32, host: &mut H) -> LayoutResult {
        self.sidebar_width = width;
        self.recompute_visibility(host)
    }

    /// Show the close affordance of the tab at `index`.
    ///
    /// At most one tab shows it; the previously hovered tab is cleared.
    pub fn show_close(&mut self, index: usize) -> bool {
        if index >= self.tabs.len() {
            return false;
        }
        self.clear_hover();
        self.tabs[index].close_visible = true;
        self.hovered_index = Some(index);
        true
    }

    /// Hide the close affordance of the tab at `index`
    pub fn hide_close(&mut self, index: usize) -> bool {
        let Some(tab) = self.tabs.get_mut(index) else {
            return false;
        };
        tab.close_visible = false;
        if self.hovered_index == Some(index) {
            self.hovered_index = None;
        }
        true
    }

    fn clear_hover(&mut self) {
        for tab in &mut self.tabs {
            tab.close_visible = false;
        }
        self.hovered_index = None;
    }

    /// Mark the tab at `index` as the only selected tab
    fn select_only(&mut self, index: usize) {
        for (idx, tab) in self.tabs.iter_mut().enumerate() {
            tab.is_selected = idx == index;
        }
        self.current_index = (index < self.tabs.len()).then_some(index);
    }

    /// Position of the tab for `route_key`
    pub fn position_of(&self, route_key: &str) -> Option<usize> {
        self.tabs.iter().position(|t| t.route_key == route_key)
    }

    /// Get a tab by route key
    pub fn get_tab(&self, route_key: &str) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.route_key == route_key)
    }

    /// All tabs, in display order
    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    /// Tabs shown in the strip
    pub fn visible_tabs(&self) -> &[Tab] {
        &self.tabs[..self.visible_count.min(self.tabs.len())]
    }

    /// Tabs listed in the overflow menu
    pub fn collapsed_tabs(&self) -> &[Tab] {
        &self.tabs[self.visible_count.min(self.tabs.len())..]
    }

    pub fn is_overflowing(&self) -> bool {
        self.is_overflowing
    }

    /// Index of the selected tab (0-based)
    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    pub fn selected_tab(&self) -> Option<&Tab> {
        self.current_index.and_then(|idx| self.tabs.get(idx))
    }

    pub fn hovered_index(&self) -> Option<usize> {
        self.hovered_index
    }

    pub fn sidebar_width(&self) -> i32 {
        self.sidebar_width
    }

    pub fn metrics(&self) -> LayoutMetrics {
        self.metrics
    }

    /// Result of the most recent layout pass
    pub fn last_layout(&self) -> Option<LayoutResult> {
        self.last_layout
    }

    /// Whether the selected tab is visible or only reachable via the overflow menu
    pub fn selected_placement(&self) -> Option<Placement> {
        let idx = self.current_index?;
        let visible = self.visible_count.min(self.tabs.len());
        Some(if idx < visible {
            Placement::Visible(idx)
        } else {
            Placement::Collapsed(idx - visible)
        })
    }

    /// True if the selected tab sits in the overflow menu
    pub fn is_selection_collapsed(&self) -> bool {
        matches!(self.selected_placement(), Some(Placement::Collapsed(_)))
    }
}

impl Default for TabRegistry {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
