#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use metriq_console::config;
use metriq_core::render::RenderMode;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
api:
  base_url: "http://127.0.0.1:8000"
view:
  mod: table # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.class().as_str(), "BAD_REQUEST");
}

#[test]
fn ok_minimal_config() {
    let ok = r#"
version: 1
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.api.base_url, "http://127.0.0.1:8000");
    assert_eq!(cfg.view.mode, RenderMode::Table);
    assert!(!cfg.view.show_value);
    assert!(cfg.view.refresh_after_create);
    assert_eq!(cfg.view.placeholder, "n/a");
}

#[test]
fn rejects_wrong_version() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert_eq!(err.class().as_str(), "BAD_REQUEST");
}

#[test]
fn rejects_non_http_base_url() {
    let bad = r#"
version: 1
api:
  base_url: "127.0.0.1:8000"
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.class().as_str(), "BAD_REQUEST");
}

#[test]
fn parses_view_switches() {
    let s = r#"
version: 1
view:
  mode: list
  show_value: true
  show_indicator: true
  refresh_after_create: false
  placeholder: "-"
"#;
    let cfg = config::load_from_str(s).expect("must parse");
    assert_eq!(cfg.view.mode, RenderMode::List);
    assert!(cfg.view.show_value);
    assert!(cfg.view.show_indicator);
    assert!(!cfg.view.refresh_after_create);
    assert_eq!(cfg.view.placeholder, "-");
}

#[test]
fn absent_file_falls_back_to_defaults() {
    let cfg = config::load_or_default("does-not-exist.yaml").expect("defaults");
    assert_eq!(cfg.version, 1);
}
