//! In-memory shell host that records every boundary call.
//!
//! Used by the `replay` command and by tests in place of a real router,
//! view cache and document.

use crate::traits::{HostLayout, Navigator, TitleSink, ViewCache};
use serde::Serialize;

/// One call made by the tab strip into its host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "call", content = "value", rename_all = "snake_case")]
pub enum HostCall {
    Navigate(String),
    Evict(String),
    SetTitle(String),
    ContainerWidth(i32),
}

/// Host with a settable viewport width and a log of calls.
#[derive(Debug, Clone, Default)]
pub struct RecordingHost {
    width: i32,
    calls: Vec<HostCall>,
}

impl RecordingHost {
    pub fn new(width: i32) -> Self {
        Self {
            width,
            calls: Vec::new(),
        }
    }

    /// Change the viewport width seen by the next layout pass.
    pub fn set_available_width(&mut self, width: i32) {
        self.width = width;
    }

    pub fn calls(&self) -> &[HostCall] {
        &self.calls
    }

    /// Return and clear the recorded calls.
    pub fn take_calls(&mut self) -> Vec<HostCall> {
        std::mem::take(&mut self.calls)
    }

    /// Route keys navigated to, in order.
    pub fn navigations(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                HostCall::Navigate(key) => Some(key.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Route keys evicted from the view cache, in order.
    pub fn evictions(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                HostCall::Evict(key) => Some(key.as_str()),
                _ => None,
            })
            .collect()
    }

    /// The most recent title set on the document
    pub fn last_title(&self) -> Option<&str> {
        self.calls.iter().rev().find_map(|call| match call {
            HostCall::SetTitle(title) => Some(title.as_str()),
            _ => None,
        })
    }

    /// The most recent container width applied by a layout pass
    pub fn last_container_width(&self) -> Option<i32> {
        self.calls.iter().rev().find_map(|call| match call {
            HostCall::ContainerWidth(width) => Some(*width),
            _ => None,
        })
    }
}

impl Navigator for RecordingHost {
    fn navigate(&mut self, route_key: &str) {
        self.calls.push(HostCall::Navigate(route_key.to_string()));
    }
}

impl ViewCache for RecordingHost {
    fn evict(&mut self, route_key: &str) {
        self.calls.push(HostCall::Evict(route_key.to_string()));
    }
}

impl TitleSink for RecordingHost {
    fn set_title(&mut self, title: &str) {
        self.calls.push(HostCall::SetTitle(title.to_string()));
    }
}

impl HostLayout for RecordingHost {
    fn available_width(&self) -> i32 {
        self.width
    }

    fn apply_container_width(&mut self, width_px: i32) {
        self.calls.push(HostCall::ContainerWidth(width_px));
    }
}
