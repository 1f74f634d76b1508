//! Metric record shapes.
//!
//! `Metric` is the server-owned row as returned by GET. `MetricDraft` is the
//! create payload: every optional field is a plain `Option` so an absent
//! value serializes as an explicit JSON `null`, never an omitted key.
//! `MetricPatch` is the partial-update payload and does the opposite: unset
//! fields are omitted entirely.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Status the server assigns when the form leaves the field blank.
pub const DEFAULT_STATUS: &str = "active";

/// A metric row as owned and returned by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub id: i64,
    pub name: String,
    pub value: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
    pub status: String,
    #[serde(default)]
    pub warning_threshold: Option<f64>,
    #[serde(default)]
    pub limit_threshold: Option<f64>,
    #[serde(default)]
    pub risk_type: Option<String>,
    #[serde(default)]
    pub business_unit: Option<String>,
    #[serde(default)]
    pub created_by: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Threshold position of a metric's current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    /// Above the limit threshold.
    Breach,
    /// Above the warning threshold.
    Warning,
    /// Within bounds (or no thresholds set).
    Green,
}

impl Indicator {
    pub fn as_str(self) -> &'static str {
        match self {
            Indicator::Breach => "breach",
            Indicator::Warning => "warning",
            Indicator::Green => "green",
        }
    }
}

impl Metric {
    /// Classify the value against the optional thresholds.
    pub fn indicator(&self) -> Indicator {
        if matches!(self.limit_threshold, Some(limit) if self.value > limit) {
            Indicator::Breach
        } else if matches!(self.warning_threshold, Some(warn) if self.value > warn) {
            Indicator::Warning
        } else {
            Indicator::Green
        }
    }
}

/// Create payload. Absent optional fields are sent as explicit `null`
/// (no `skip_serializing_if` anywhere in this struct).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricDraft {
    pub name: String,
    pub value: f64,
    pub description: Option<String>,
    pub unit: Option<String>,
    pub status: String,
    pub warning_threshold: Option<f64>,
    pub limit_threshold: Option<f64>,
    pub risk_type: Option<String>,
    pub business_unit: Option<String>,
    pub created_by: Option<String>,
}

impl MetricDraft {
    /// Minimal draft: required fields set, everything else absent.
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
            description: None,
            unit: None,
            status: DEFAULT_STATUS.to_string(),
            warning_threshold: None,
            limit_threshold: None,
            risk_type: None,
            business_unit: None,
            created_by: None,
        }
    }
}

/// Partial-update payload. Unset fields are omitted from the body so the
/// server only touches what the caller named.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MetricPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning_threshold: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit_threshold: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_unit: Option<String>,
}

impl MetricPatch {
    /// True when no field is set (nothing to send).
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.value.is_none()
            && self.description.is_none()
            && self.unit.is_none()
            && self.status.is_none()
            && self.warning_threshold.is_none()
            && self.limit_threshold.is_none()
            && self.risk_type.is_none()
            && self.business_unit.is_none()
    }
}
