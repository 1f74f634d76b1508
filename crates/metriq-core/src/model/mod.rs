//! Metric record shapes and form-field parsing.

pub mod form;
pub mod metric;

pub use form::MetricForm;
pub use metric::{Indicator, Metric, MetricDraft, MetricPatch, DEFAULT_STATUS};
