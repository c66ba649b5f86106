//! Shared integration test helpers for route-tabs.
//!
//! Include this module at the top of each test file that needs it:
//!
//! ```ignore
//! mod common;
//! use common::{strip_with_routes, assert_registry_invariants, TestContext};
//! ```
//!
//! The `#[allow(dead_code)]` attribute suppresses warnings when only a subset
//! of helpers is used per file.

#![allow(dead_code)]

use route_tabs::host::RecordingHost;
use route_tabs::{RouteEvent, ShellEvent, TabRegistry, TabStrip};
use route_tabs_config::Config;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Route-changed event whose title is the route without its leading slash
pub fn route(url: &str) -> ShellEvent {
    ShellEvent::RouteChanged(RouteEvent::new(url.trim_start_matches('/'), url))
}

/// Strip at `width` with one tab opened per route, in order
pub fn strip_with_routes(width: i32, routes: &[&str]) -> TabStrip<RecordingHost> {
    let mut strip = TabStrip::from_config(&Config::default(), RecordingHost::new(width));
    for url in routes {
        strip.handle_event(route(url));
    }
    strip
}

/// Route keys in display order
pub fn route_keys(registry: &TabRegistry) -> Vec<String> {
    registry
        .tabs()
        .iter()
        .map(|t| t.route_key.clone())
        .collect()
}

/// Check uniqueness, single selection and split completeness
pub fn assert_registry_invariants(registry: &TabRegistry) {
    let tabs = registry.tabs();

    let unique: HashSet<&str> = tabs.iter().map(|t| t.route_key.as_str()).collect();
    assert_eq!(unique.len(), tabs.len(), "duplicate route keys: {tabs:?}");

    if tabs.is_empty() {
        assert_eq!(registry.current_index(), None);
    } else {
        let selected: Vec<usize> = tabs
            .iter()
            .enumerate()
            .filter(|(_, t)| t.is_selected)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(selected.len(), 1, "expected one selected tab: {tabs:?}");
        assert_eq!(registry.current_index(), Some(selected[0]));
    }

    let rejoined: Vec<_> = registry
        .visible_tabs()
        .iter()
        .chain(registry.collapsed_tabs())
        .cloned()
        .collect();
    assert_eq!(rejoined.as_slice(), tabs, "split lost or reordered tabs");
    assert_eq!(
        registry.is_overflowing(),
        !registry.collapsed_tabs().is_empty()
    );

    let close_shown: Vec<usize> = tabs
        .iter()
        .enumerate()
        .filter(|(_, t)| t.close_visible)
        .map(|(i, _)| i)
        .collect();
    assert_eq!(
        close_shown,
        registry.hovered_index().into_iter().collect::<Vec<_>>(),
        "close affordance out of sync with hover"
    );
}

/// Provides test isolation with automatic temp-dir cleanup.
pub struct TestContext {
    /// Temporary directory — kept alive for the lifetime of the context.
    pub dir: TempDir,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `contents` to `name` inside the temp dir and return its path
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).expect("Failed to write test file");
        path
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
