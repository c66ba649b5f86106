//! Open-tabs strip for a single-page application shell.
//!
//! Every completed navigation opens or re-selects a tab keyed by its route;
//! closing a tab evicts its cached view and selects a neighbour; the strip
//! shows as many tabs as fit the available width and collapses the rest into
//! an overflow menu.
//!
//! ## Module layout
//!
//! - [`layout`]: pure width-fitting calculation.
//! - [`tab`]: tab data model and the [`tab::TabRegistry`] state machine.
//! - [`traits`]: boundary traits the host implements (router, view cache,
//!   title, layout).
//! - [`strip`]: [`strip::TabStrip`], the event handler tying a registry to a host.
//! - [`host`]: an in-memory host that records boundary calls.
//! - [`replay`]: YAML event scripts replayed against a strip.

pub mod cli;
pub mod debug;
pub mod host;
pub mod layout;
pub mod replay;
pub mod strip;
pub mod tab;
pub mod traits;

pub use layout::{LayoutInput, LayoutMetrics, LayoutResult, compute_layout};
pub use strip::{ShellEvent, StripSnapshot, TabStrip, TabStripAction};
pub use tab::{Placement, RouteEvent, Tab, TabRegistry, TabState};
pub use traits::{HostLayout, Navigator, ShellHost, TitleSink, ViewCache};
