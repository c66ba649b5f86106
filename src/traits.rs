//! Boundary traits between the tab strip and its host shell.
//!
//! The registry never talks to a router, a view cache or the page title
//! directly. Hosts implement these traits and pass themselves into each
//! registry operation, which keeps the registry testable with an in-memory
//! host (see [`crate::host::RecordingHost`]).

/// Performs route transitions on behalf of the tab strip.
pub trait Navigator {
    /// Request navigation to `route_key`.
    ///
    /// Fire-and-forget: completion is signalled later by a route-changed
    /// event, and a failed navigation simply never produces one.
    fn navigate(&mut self, route_key: &str);
}

/// Per-route cached view storage.
pub trait ViewCache {
    /// Drop the cached view for `route_key`. Called once per closed tab,
    /// before any navigation is requested.
    fn evict(&mut self, route_key: &str);
}

/// Document title display.
pub trait TitleSink {
    fn set_title(&mut self, title: &str);
}

/// Width source and sink for the strip's container.
pub trait HostLayout {
    /// Current width of the host viewport in pixels.
    fn available_width(&self) -> i32;

    /// Apply the computed container width to the host's own bounds.
    ///
    /// Called once per layout pass. `width_px` may be zero or negative when
    /// the viewport is smaller than the surrounding chrome.
    fn apply_container_width(&mut self, width_px: i32);
}

/// Everything the tab strip needs from its host.
pub trait ShellHost: Navigator + ViewCache + TitleSink + HostLayout {}

impl<T: Navigator + ViewCache + TitleSink + HostLayout> ShellHost for T {}
