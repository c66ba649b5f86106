//! Open tabs keyed by route.
//!
//! Each tab stands for one cached route view. A tab's identity is its route
//! key (the route URL); its position in the registry is its display position.

mod registry;

pub use registry::{Placement, TabRegistry};

use serde::{Deserialize, Serialize};

/// Notification that navigation completed.
///
/// `url` is the route key of the destination; `title` is the display title
/// taken from the leaf route bound to the primary display region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteEvent {
    pub title: String,
    pub url: String,
}

impl RouteEvent {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }
}

/// Selection state of a live tab.
///
/// A tab enters `Selected` when it is created, moves between `Selected` and
/// `Unselected` as other tabs are picked, and leaves the registry only
/// through an explicit close.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TabState {
    Selected,
    Unselected,
}

/// A single open tab
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tab {
    /// Display title
    pub title: String,
    /// Route path of the tab's view; unique within a registry
    pub route_key: String,
    /// Permission tag carried for the rendering layer (empty by default)
    pub permission: String,
    /// Whether this is the selected tab
    pub is_selected: bool,
    /// Whether the close affordance is currently shown (hover)
    #[serde(default)]
    pub close_visible: bool,
}

impl Tab {
    /// Create a newly opened, selected tab
    pub fn new(title: impl Into<String>, route_key: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            route_key: route_key.into(),
            permission: String::new(),
            is_selected: true,
            close_visible: false,
        }
    }

    pub fn state(&self) -> TabState {
        if self.is_selected {
            TabState::Selected
        } else {
            TabState::Unselected
        }
    }
}
