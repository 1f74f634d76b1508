//! HTTP client for the metrics resource.
//!
//! Fixed REST surface at `{base_url}/metrics/`:
//! - `GET    /metrics/`     -> full collection (no filtering, no paging)
//! - `GET    /metrics/{id}` -> one record
//! - `POST   /metrics/`     -> create (body: `MetricDraft`, explicit nulls)
//! - `PUT    /metrics/{id}` -> partial update (body: `MetricPatch`)
//! - `DELETE /metrics/{id}` -> remove (ack body ignored)
//!
//! Non-2xx statuses map to `MetriqError::Api` (an id-addressed 404 to
//! `NotFound`), transport
//! failures to `Network`, malformed bodies to `Decode`. No retry, no
//! timeout, no caching: every read is a fresh fetch.

use reqwest::{Response, StatusCode};

use metriq_core::error::{MetriqError, Result};
use metriq_core::model::{Metric, MetricDraft, MetricPatch};

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: String,
}

impl ApiClient {
    /// Build a client against the given base endpoint (trailing slash
    /// tolerated).
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/metrics/", self.base)
    }

    fn item_url(&self, id: i64) -> String {
        format!("{}/metrics/{id}", self.base)
    }

    /// Fetch the full collection, in server order.
    pub async fn list(&self) -> Result<Vec<Metric>> {
        let resp = self
            .http
            .get(self.collection_url())
            .send()
            .await
            .map_err(map_transport)?;
        let resp = check_status(resp, None)?;
        resp.json::<Vec<Metric>>().await.map_err(map_transport)
    }

    /// Fetch one record by id.
    pub async fn get(&self, id: i64) -> Result<Metric> {
        let resp = self
            .http
            .get(self.item_url(id))
            .send()
            .await
            .map_err(map_transport)?;
        let resp = check_status(resp, Some(id))?;
        resp.json::<Metric>().await.map_err(map_transport)
    }

    /// Create a record. The response body is not needed by any caller, only
    /// the status is checked.
    pub async fn create(&self, draft: &MetricDraft) -> Result<()> {
        let resp = self
            .http
            .post(self.collection_url())
            .json(draft)
            .send()
            .await
            .map_err(map_transport)?;
        check_status(resp, None)?;
        Ok(())
    }

    /// Partially update a record; only fields set in the patch are sent.
    pub async fn update(&self, id: i64, patch: &MetricPatch) -> Result<Metric> {
        let resp = self
            .http
            .put(self.item_url(id))
            .json(patch)
            .send()
            .await
            .map_err(map_transport)?;
        let resp = check_status(resp, Some(id))?;
        resp.json::<Metric>().await.map_err(map_transport)
    }

    /// Delete a record by id. The server's ack message is ignored.
    pub async fn delete(&self, id: i64) -> Result<()> {
        let resp = self
            .http
            .delete(self.item_url(id))
            .send()
            .await
            .map_err(map_transport)?;
        check_status(resp, Some(id))?;
        Ok(())
    }
}

/// Map a completed response's status to the error surface.
///
/// 404 means `NotFound` only for id-addressed requests; on the collection
/// path it is just another non-ok status and stays `Api` so the caller's
/// status-notice handling applies.
fn check_status(resp: Response, id: Option<i64>) -> Result<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    tracing::debug!(status = status.as_u16(), url = %resp.url(), "request failed");
    if status == StatusCode::NOT_FOUND {
        if let Some(id) = id {
            return Err(MetriqError::NotFound(format!("metric {id}")));
        }
    }
    Err(MetriqError::Api {
        status: status.as_u16(),
    })
}

/// Map a reqwest failure: body decode problems are `Decode`, everything else
/// (connect, send, timeout at the OS level) is `Network`.
fn map_transport(e: reqwest::Error) -> MetriqError {
    if e.is_decode() {
        MetriqError::Decode(e.to_string())
    } else {
        MetriqError::Network(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_shapes() {
        let c = ApiClient::new("http://127.0.0.1:8000");
        assert_eq!(c.collection_url(), "http://127.0.0.1:8000/metrics/");
        assert_eq!(c.item_url(3), "http://127.0.0.1:8000/metrics/3");

        // trailing slash on the base does not double up
        let c = ApiClient::new("http://127.0.0.1:8000/");
        assert_eq!(c.collection_url(), "http://127.0.0.1:8000/metrics/");
    }
}
