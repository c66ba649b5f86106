//! Scripted replay of shell events.
//!
//! A replay script is a YAML document listing events in arrival order:
//!
//! ```yaml
//! host_width: 1200
//! events:
//!   - event: route_changed
//!     title: Dashboard
//!     url: /dashboard
//!   - event: resized
//!     host_width: 700
//!   - event: close_requested
//!     route_key: /dashboard
//! ```
//!
//! The events drive a [`TabStrip`] over a [`RecordingHost`]; the result is
//! the final strip plus every call the strip made into the host.

use crate::host::{HostCall, RecordingHost};
use crate::strip::{ShellEvent, StripSnapshot, TabStrip, TabStripAction};
use crate::tab::RouteEvent;
use route_tabs_config::Config;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors loading a replay script
#[derive(Debug, Error)]
pub enum ReplayError {
    /// The script file could not be read.
    #[error("failed to read replay script '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The script is not valid YAML or has an unknown event.
    #[error("failed to parse replay script '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml_ng::Error,
    },
}

/// One scripted event
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ScriptStep {
    RouteChanged {
        title: String,
        url: String,
    },
    /// Optionally change the host width before the resize notification
    Resized {
        #[serde(default)]
        host_width: Option<i32>,
    },
    SidebarResized {
        width: i32,
    },
    TabClicked {
        index: usize,
    },
    /// Without `was_selected` the tab's own selection flag is used
    CloseRequested {
        route_key: String,
        #[serde(default)]
        was_selected: Option<bool>,
    },
    Hover {
        index: usize,
    },
    Unhover {
        index: usize,
    },
}

/// A parsed replay script
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReplayScript {
    /// Host width at startup; falls back to the config's initial width
    #[serde(default)]
    pub host_width: Option<i32>,
    #[serde(default)]
    pub events: Vec<ScriptStep>,
}

impl ReplayScript {
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml_ng::Error> {
        serde_yaml_ng::from_str(yaml)
    }

    /// Read and parse a script file
    pub fn load(path: &Path) -> Result<Self, ReplayError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ReplayError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&contents).map_err(|source| ReplayError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Final state of a replayed session
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayReport {
    pub strip: StripSnapshot,
    pub host_calls: Vec<HostCall>,
}

/// Run `script` against a fresh strip.
///
/// `host_width` overrides both the script's and the config's startup width.
pub fn replay(script: &ReplayScript, config: &Config, host_width: Option<i32>) -> ReplayReport {
    let width = host_width
        .or(script.host_width)
        .unwrap_or(config.initial_host_width);
    log::info!(
        "Replaying {} events at host width {}px",
        script.events.len(),
        width
    );

    let mut strip = TabStrip::from_config(config, RecordingHost::new(width));
    for step in &script.events {
        apply_step(&mut strip, step);
    }

    let strip_snapshot = strip.snapshot();
    let (_, mut host) = strip.into_parts();
    ReplayReport {
        strip: strip_snapshot,
        host_calls: host.take_calls(),
    }
}

fn apply_step(strip: &mut TabStrip<RecordingHost>, step: &ScriptStep) {
    match step {
        ScriptStep::RouteChanged { title, url } => {
            strip.handle_event(ShellEvent::RouteChanged(RouteEvent::new(
                title.as_str(),
                url.as_str(),
            )));
        }
        ScriptStep::Resized { host_width } => {
            if let Some(width) = host_width {
                strip.host_mut().set_available_width(*width);
            }
            strip.handle_event(ShellEvent::Resized);
        }
        ScriptStep::SidebarResized { width } => {
            strip.handle_event(ShellEvent::SidebarResized(*width));
        }
        ScriptStep::TabClicked { index } => {
            strip.handle_event(ShellEvent::TabClicked(*index));
        }
        ScriptStep::CloseRequested {
            route_key,
            was_selected: Some(was_selected),
        } => {
            strip.handle_event(ShellEvent::CloseRequested {
                route_key: route_key.clone(),
                was_selected: *was_selected,
            });
        }
        ScriptStep::CloseRequested {
            route_key,
            was_selected: None,
        } => {
            strip.dispatch(TabStripAction::Close(route_key.clone()));
        }
        ScriptStep::Hover { index } => strip.handle_event(ShellEvent::Hover(*index)),
        ScriptStep::Unhover { index } => strip.handle_event(ShellEvent::Unhover(*index)),
    }
}

impl fmt::Display for ReplayReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let strip = &self.strip;
        write!(
            f,
            "tabs: {} (visible {}, collapsed {}",
            strip.tab_count(),
            strip.visible.len(),
            strip.collapsed.len()
        )?;
        if strip.is_overflowing {
            write!(f, ", overflowing")?;
        }
        writeln!(f, ")")?;
        if let Some(layout) = strip.layout {
            writeln!(f, "container width: {}px", layout.reported_container_width_px)?;
        }

        let all = strip.visible.iter().chain(strip.collapsed.iter());
        for (index, tab) in all.enumerate() {
            if index == strip.visible.len() {
                writeln!(f, "  -- overflow menu --")?;
            }
            let marker = if tab.is_selected { '*' } else { ' ' };
            writeln!(f, "  {marker} [{index}] {} ({})", tab.title, tab.route_key)?;
        }

        writeln!(f, "host calls:")?;
        for call in &self.host_calls {
            match call {
                HostCall::Navigate(key) => writeln!(f, "  navigate {key}")?,
                HostCall::Evict(key) => writeln!(f, "  evict {key}")?,
                HostCall::SetTitle(title) => writeln!(f, "  title {title}")?,
                HostCall::ContainerWidth(width) => writeln!(f, "  width {width}")?,
            }
        }
        Ok(())
    }
}
