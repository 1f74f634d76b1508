//! Table layout: one aligned row per metric.
//!
//! Columns: ID, NAME, VALUE (when enabled), UNIT, STATUS, INDICATOR (when
//! enabled), CREATED. Absent optional fields show the configured
//! placeholder; timestamps are formatted in the local timezone.

use std::fmt::Write;

use chrono::{DateTime, Local, Utc};

use crate::model::Metric;
use crate::render::RenderOptions;

/// Local display format for server timestamps.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}

pub fn render(metrics: &[Metric], opts: &RenderOptions) -> String {
    let mut header: Vec<&str> = vec!["ID", "NAME"];
    if opts.show_value {
        header.push("VALUE");
    }
    header.push("UNIT");
    header.push("STATUS");
    if opts.show_indicator {
        header.push("INDICATOR");
    }
    header.push("CREATED");

    let rows: Vec<Vec<String>> = metrics.iter().map(|m| row(m, opts)).collect();

    // Widths in chars, not bytes; the formatter pads by char count.
    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for r in &rows {
        for (i, cell) in r.iter().enumerate() {
            let w = cell.chars().count();
            if w > widths[i] {
                widths[i] = w;
            }
        }
    }

    let mut out = String::new();
    write_row(&mut out, &header.iter().map(|h| h.to_string()).collect::<Vec<_>>(), &widths);
    for r in &rows {
        write_row(&mut out, r, &widths);
    }
    out
}

fn row(m: &Metric, opts: &RenderOptions) -> Vec<String> {
    let mut cells = vec![m.id.to_string(), m.name.clone()];
    if opts.show_value {
        cells.push(m.value.to_string());
    }
    cells.push(m.unit.clone().unwrap_or_else(|| opts.placeholder.clone()));
    cells.push(m.status.clone());
    if opts.show_indicator {
        cells.push(m.indicator().as_str().to_string());
    }
    cells.push(format_timestamp(&m.created_at));
    cells
}

fn write_row(out: &mut String, cells: &[String], widths: &[usize]) {
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            out.push_str("  ");
        }
        // Last column is not padded, keeps trailing whitespace out.
        if i + 1 == cells.len() {
            out.push_str(cell);
        } else {
            let _ = write!(out, "{cell:<width$}", width = widths[i]);
        }
    }
    out.push('\n');
}
