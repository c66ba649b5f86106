//! Default pixel widths for the tab strip's surrounding chrome.

pub fn sidebar_width() -> i32 {
    256
}

pub fn sidebar_collapsed_width() -> i32 {
    68
}

pub fn header_width() -> i32 {
    180
}

/// Compensates for box-model rounding differences between hosts.
pub fn fixed_padding() -> i32 {
    2
}

pub fn overflow_control_width() -> i32 {
    38
}

pub fn tab_item_width() -> i32 {
    96
}

pub fn initial_host_width() -> i32 {
    1280
}
