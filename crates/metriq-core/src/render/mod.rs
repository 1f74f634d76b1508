//! Pure rendering of a fetched metric collection.
//!
//! Inputs are `Metric` values, output is text; no transport, no terminal
//! handling. Every render is a full rebuild of the view in server order —
//! there is no diffing and no client-side sort.

pub mod list;
pub mod table;

use serde::{Deserialize, Serialize};

use crate::model::Metric;

/// How the collection is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    Table,
    List,
}

/// Display switches for the table layout.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Show the VALUE column (hidden in the stock table layout).
    pub show_value: bool,
    /// Show the threshold indicator column.
    pub show_indicator: bool,
    /// Token displayed for absent optional fields.
    pub placeholder: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_value: false,
            show_indicator: false,
            placeholder: "n/a".to_string(),
        }
    }
}

/// Render the collection with the given mode and options.
pub fn render(metrics: &[Metric], mode: RenderMode, opts: &RenderOptions) -> String {
    match mode {
        RenderMode::Table => table::render(metrics, opts),
        RenderMode::List => list::render(metrics),
    }
}
