//! Rendering property tests (table and list layouts).

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::fs;

use metriq_core::model::Metric;
use metriq_core::render::{self, table, RenderMode, RenderOptions};

fn load(name: &str) -> Metric {
    let s = fs::read_to_string(format!("tests/vectors/{name}")).unwrap();
    serde_json::from_str(&s).unwrap()
}

fn sample() -> Vec<Metric> {
    vec![load("metric_min.json"), load("metric_full.json")]
}

#[test]
fn table_shows_placeholder_for_missing_unit() {
    let metrics = sample();
    let out = render::render(&metrics, RenderMode::Table, &RenderOptions::default());

    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 3); // header + 2 rows

    // metric_min has no unit -> placeholder; metric_full shows it verbatim
    assert!(lines[1].contains("CPU Load"));
    assert!(lines[1].contains("n/a"));
    assert!(lines[2].contains("days"));
    assert!(!lines[2].contains("n/a"));
}

#[test]
fn table_row_carries_id_and_local_timestamp() {
    let m = load("metric_min.json");
    let out = render::render(std::slice::from_ref(&m), RenderMode::Table, &RenderOptions::default());
    let row = out.lines().nth(1).unwrap();

    assert!(row.starts_with('1'));
    assert!(row.contains("ok"));
    assert!(row.contains(&table::format_timestamp(&m.created_at)));
}

// The VALUE column ships disabled; it only appears when switched on.
#[test]
fn value_column_is_opt_in() {
    let metrics = sample();

    let hidden = render::render(&metrics, RenderMode::Table, &RenderOptions::default());
    assert!(!hidden.lines().next().unwrap().contains("VALUE"));
    assert!(!hidden.contains("72.5"));

    let opts = RenderOptions {
        show_value: true,
        ..RenderOptions::default()
    };
    let shown = render::render(&metrics, RenderMode::Table, &opts);
    assert!(shown.lines().next().unwrap().contains("VALUE"));
    assert!(shown.contains("72.5"));
}

#[test]
fn indicator_column_is_opt_in() {
    let metrics = sample();
    let opts = RenderOptions {
        show_indicator: true,
        ..RenderOptions::default()
    };
    let out = render::render(&metrics, RenderMode::Table, &opts);
    assert!(out.lines().next().unwrap().contains("INDICATOR"));
    // metric_full: value 12.25 between warn 10 and limit 14
    assert!(out.contains("warning"));
    // metric_min has no thresholds
    assert!(out.contains("green"));
}

#[test]
fn list_renders_name_value_lines() {
    let metrics = sample();
    let out = render::render(&metrics, RenderMode::List, &RenderOptions::default());
    assert_eq!(out, "CPU Load: 72.5\nPatch Latency: 12.25\n");
}

// Same input, same output: rendering holds no state between calls.
#[test]
fn render_is_idempotent() {
    let metrics = sample();
    let opts = RenderOptions::default();
    let a = render::render(&metrics, RenderMode::Table, &opts);
    let b = render::render(&metrics, RenderMode::Table, &opts);
    assert_eq!(a, b);

    let a = render::render(&metrics, RenderMode::List, &opts);
    let b = render::render(&metrics, RenderMode::List, &opts);
    assert_eq!(a, b);
}

// Column widths count chars, not bytes: a multibyte name must not widen
// its column past the visible length.
#[test]
fn table_aligns_multibyte_names_by_chars() {
    let mut m = load("metric_min.json");
    m.name = "größer".into(); // 6 chars, 8 bytes

    let out = render::render(std::slice::from_ref(&m), RenderMode::Table, &RenderOptions::default());
    let mut lines = out.lines();

    // NAME column is 6 chars wide (max of "NAME" and "größer"), never 8
    assert_eq!(lines.next().unwrap(), "ID  NAME    UNIT  STATUS  CREATED");
    assert_eq!(
        lines.next().unwrap(),
        format!("1   größer  n/a   ok      {}", table::format_timestamp(&m.created_at))
    );
}

#[test]
fn empty_collection_renders_header_only() {
    let out = render::render(&[], RenderMode::Table, &RenderOptions::default());
    assert_eq!(out.lines().count(), 1);

    let out = render::render(&[], RenderMode::List, &RenderOptions::default());
    assert!(out.is_empty());
}
