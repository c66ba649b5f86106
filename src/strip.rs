//! Tab strip controller.
//!
//! [`TabStrip`] is the single handler a shell registers with its router,
//! resize source and tab UI. It owns the [`TabRegistry`] and the host, and
//! turns incoming [`ShellEvent`]s and UI [`TabStripAction`]s into registry
//! operations.

use crate::layout::LayoutResult;
use crate::tab::{Placement, RouteEvent, Tab, TabRegistry};
use crate::traits::ShellHost;
use route_tabs_config::Config;
use serde::Serialize;

/// Events delivered by the shell, in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellEvent {
    /// Navigation completed
    RouteChanged(RouteEvent),
    /// Host viewport was resized
    Resized,
    /// Sidebar width changed
    SidebarResized(i32),
    /// User clicked the tab at this index
    TabClicked(usize),
    /// User clicked a tab's close button
    CloseRequested { route_key: String, was_selected: bool },
    /// Pointer entered the tab at this index
    Hover(usize),
    /// Pointer left the tab at this index
    Unhover(usize),
}

/// Actions produced by the tab strip's UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum TabStripAction {
    /// No action
    None,
    /// Switch to the tab at this index
    SwitchTo(usize),
    /// Close the tab with this route key
    Close(String),
    /// Show the close button of the tab at this index
    ShowClose(usize),
    /// Hide the close button of the tab at this index
    HideClose(usize),
}

/// Published view of the strip after an event
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StripSnapshot {
    pub visible: Vec<Tab>,
    pub collapsed: Vec<Tab>,
    pub current_index: Option<usize>,
    pub selected_placement: Option<Placement>,
    pub is_overflowing: bool,
    pub layout: Option<LayoutResult>,
}

impl StripSnapshot {
    pub fn tab_count(&self) -> usize {
        self.visible.len() + self.collapsed.len()
    }
}

/// Registry plus the host it reports to
#[derive(Debug)]
pub struct TabStrip<H: ShellHost> {
    registry: TabRegistry,
    host: H,
}

impl<H: ShellHost> TabStrip<H> {
    /// Attach `registry` to `host` and run the initial layout pass
    pub fn new(mut registry: TabRegistry, mut host: H) -> Self {
        registry.recompute_visibility(&mut host);
        Self { registry, host }
    }

    /// Create a strip with an empty registry configured from `config`
    pub fn from_config(config: &Config, host: H) -> Self {
        Self::new(TabRegistry::from_config(config), host)
    }

    /// Handle one shell event
    pub fn handle_event(&mut self, event: ShellEvent) {
        log::trace!("Handling {:?}", event);
        match event {
            ShellEvent::RouteChanged(route) => {
                self.registry.on_route_changed(&route, &mut self.host);
            }
            ShellEvent::Resized => {
                self.registry.on_resize(&mut self.host);
            }
            ShellEvent::SidebarResized(width) => {
                self.registry.on_sidebar_resized(width, &mut self.host);
            }
            ShellEvent::TabClicked(index) => {
                self.registry.select_tab(index, &mut self.host);
            }
            ShellEvent::CloseRequested {
                route_key,
                was_selected,
            } => {
                self.registry
                    .close_tab(&route_key, was_selected, &mut self.host);
            }
            ShellEvent::Hover(index) => {
                self.registry.show_close(index);
            }
            ShellEvent::Unhover(index) => {
                self.registry.hide_close(index);
            }
        }
    }

    /// Apply an action from the tab UI
    pub fn dispatch(&mut self, action: TabStripAction) {
        let event = match action {
            TabStripAction::None => return,
            TabStripAction::SwitchTo(index) => ShellEvent::TabClicked(index),
            TabStripAction::Close(route_key) => {
                let was_selected = self
                    .registry
                    .get_tab(&route_key)
                    .is_some_and(|t| t.is_selected);
                ShellEvent::CloseRequested {
                    route_key,
                    was_selected,
                }
            }
            TabStripAction::ShowClose(index) => ShellEvent::Hover(index),
            TabStripAction::HideClose(index) => ShellEvent::Unhover(index),
        };
        self.handle_event(event);
    }

    /// Current visible/collapsed split and selection
    pub fn snapshot(&self) -> StripSnapshot {
        StripSnapshot {
            visible: self.registry.visible_tabs().to_vec(),
            collapsed: self.registry.collapsed_tabs().to_vec(),
            current_index: self.registry.current_index(),
            selected_placement: self.registry.selected_placement(),
            is_overflowing: self.registry.is_overflowing(),
            layout: self.registry.last_layout(),
        }
    }

    pub fn registry(&self) -> &TabRegistry {
        &self.registry
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Tear down the strip, returning its parts
    pub fn into_parts(self) -> (TabRegistry, H) {
        (self.registry, self.host)
    }
}
