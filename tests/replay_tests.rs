//! Replay scripts loaded from disk.

mod common;

use common::TestContext;
use route_tabs::host::HostCall;
use route_tabs::replay::{ReplayError, ReplayScript, replay};
use route_tabs_config::Config;

const SESSION: &str = r#"
host_width: 1200
events:
  - event: route_changed
    title: Dashboard
    url: /dashboard
  - event: route_changed
    title: Users
    url: /system/users
  - event: route_changed
    title: Roles
    url: /system/roles
  - event: hover
    index: 1
  - event: close_requested
    route_key: /system/users
    was_selected: false
  - event: tab_clicked
    index: 0
  - event: route_changed
    title: Dashboard
    url: /dashboard
  - event: sidebar_resized
    width: 64
  - event: resized
    host_width: 640
"#;

#[test]
fn replays_a_full_session() {
    let ctx = TestContext::new();
    let path = ctx.write_file("session.yaml", SESSION);

    let script = ReplayScript::load(&path).unwrap();
    let report = replay(&script, &Config::default(), None);

    // 640-64-68-180-2 = 326 container, 288 usable, 3 items fit, 2 tabs open
    assert_eq!(report.strip.tab_count(), 2);
    assert_eq!(report.strip.visible.len(), 2);
    assert!(!report.strip.is_overflowing);
    assert_eq!(report.strip.current_index, Some(0));
    assert_eq!(
        report.strip.layout.map(|l| l.reported_container_width_px),
        Some(326)
    );
    assert!(report.host_calls.contains(&HostCall::Evict("/system/users".to_string())));
    assert_eq!(
        report
            .host_calls
            .iter()
            .filter(|c| matches!(c, HostCall::Navigate(_)))
            .count(),
        1
    );
}

#[test]
fn report_serializes_to_json() {
    let script = ReplayScript::from_yaml(SESSION).unwrap();
    let report = replay(&script, &Config::default(), None);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["strip"]["current_index"], 0);
    assert_eq!(json["strip"]["visible"][0]["route_key"], "/dashboard");
    assert_eq!(json["host_calls"][0]["call"], "container_width");
}

#[test]
fn missing_script_is_a_read_error() {
    let ctx = TestContext::new();
    let err = ReplayScript::load(&ctx.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(err, ReplayError::Read { .. }));
    assert!(err.to_string().contains("absent.yaml"));
}

#[test]
fn malformed_script_is_a_parse_error() {
    let ctx = TestContext::new();
    let path = ctx.write_file("bad.yaml", "events:\n  - event: route_changed\n    url: [1, 2]\n");
    let err = ReplayScript::load(&path).unwrap_err();
    assert!(matches!(err, ReplayError::Parse { .. }));
}

#[test]
fn empty_script_uses_config_width() {
    let config = Config {
        initial_host_width: 900,
        ..Config::default()
    };
    let report = replay(&ReplayScript::from_yaml("{}").unwrap(), &config, None);

    assert_eq!(report.strip.tab_count(), 0);
    assert_eq!(report.host_calls, vec![HostCall::ContainerWidth(900 - 506)]);
}
