//! List layout: one `name: value` line per metric.

use std::fmt::Write;

use crate::model::Metric;

pub fn render(metrics: &[Metric]) -> String {
    let mut out = String::new();
    for m in metrics {
        let _ = writeln!(out, "{}: {}", m.name, m.value);
    }
    out
}
