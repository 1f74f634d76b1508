//! Raw form-field values and their parsing into a create payload.
//!
//! Mirrors the entry form field-for-field: every attribute arrives as text.
//! Blank optional fields map to `None` (serialized as `null` downstream),
//! never to an empty string, and blank numeric fields map to `None`, never
//! to zero or NaN.

use crate::error::{MetriqError, Result};
use crate::model::metric::{MetricDraft, DEFAULT_STATUS};

/// The current values of the named entry fields, all as raw text.
#[derive(Debug, Clone, Default)]
pub struct MetricForm {
    pub name: String,
    pub value: String,
    pub description: String,
    pub unit: String,
    pub status: String,
    pub warning_threshold: String,
    pub limit_threshold: String,
    pub risk_type: String,
    pub business_unit: String,
    pub created_by: String,
}

impl MetricForm {
    /// Parse the fields into a create payload.
    ///
    /// `name` and `value` are required; `value` and both thresholds must be
    /// valid floats when present. A blank `status` falls back to the server
    /// default rather than sending an empty string.
    pub fn draft(&self) -> Result<MetricDraft> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(MetriqError::BadRequest("name is required".into()));
        }
        let value = parse_required_number("value", &self.value)?;

        let status = match opt_text(&self.status) {
            Some(s) => s,
            None => DEFAULT_STATUS.to_string(),
        };

        Ok(MetricDraft {
            name: name.to_string(),
            value,
            description: opt_text(&self.description),
            unit: opt_text(&self.unit),
            status,
            warning_threshold: opt_number("warning_threshold", &self.warning_threshold)?,
            limit_threshold: opt_number("limit_threshold", &self.limit_threshold)?,
            risk_type: opt_text(&self.risk_type),
            business_unit: opt_text(&self.business_unit),
            created_by: opt_text(&self.created_by),
        })
    }
}

/// Blank text becomes `None`; anything else is kept verbatim (trimmed).
fn opt_text(s: &str) -> Option<String> {
    let t = s.trim();
    if t.is_empty() {
        None
    } else {
        Some(t.to_string())
    }
}

/// Blank numeric field becomes `None`; non-blank must parse as a float.
fn opt_number(field: &str, s: &str) -> Result<Option<f64>> {
    let t = s.trim();
    if t.is_empty() {
        return Ok(None);
    }
    match t.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(Some(v)),
        _ => Err(MetriqError::BadRequest(format!(
            "{field} must be a number, got {t:?}"
        ))),
    }
}

fn parse_required_number(field: &str, s: &str) -> Result<f64> {
    opt_number(field, s)?
        .ok_or_else(|| MetriqError::BadRequest(format!("{field} is required")))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn minimal() -> MetricForm {
        MetricForm {
            name: "CPU Load".into(),
            value: "72.5".into(),
            ..MetricForm::default()
        }
    }

    #[test]
    fn blank_optionals_become_none() {
        let draft = minimal().draft().unwrap();
        assert_eq!(draft.name, "CPU Load");
        assert_eq!(draft.value, 72.5);
        assert_eq!(draft.description, None);
        assert_eq!(draft.unit, None);
        assert_eq!(draft.warning_threshold, None);
        assert_eq!(draft.limit_threshold, None);
        assert_eq!(draft.risk_type, None);
        assert_eq!(draft.business_unit, None);
        assert_eq!(draft.created_by, None);
    }

    #[test]
    fn blank_status_falls_back_to_default() {
        let draft = minimal().draft().unwrap();
        assert_eq!(draft.status, DEFAULT_STATUS);

        let mut form = minimal();
        form.status = "archived".into();
        assert_eq!(form.draft().unwrap().status, "archived");
    }

    #[test]
    fn threshold_parsing() {
        let mut form = minimal();
        form.warning_threshold = "80".into();
        form.limit_threshold = "  95.5 ".into();
        let draft = form.draft().unwrap();
        assert_eq!(draft.warning_threshold, Some(80.0));
        assert_eq!(draft.limit_threshold, Some(95.5));

        form.limit_threshold = "high".into();
        assert!(form.draft().is_err());
    }

    #[test]
    fn missing_required_fields_rejected() {
        let mut form = minimal();
        form.name = "   ".into();
        assert!(form.draft().is_err());

        let mut form = minimal();
        form.value = "".into();
        assert!(form.draft().is_err());

        let mut form = minimal();
        form.value = "NaN".into();
        assert!(form.draft().is_err());
    }
}
