//! View controller: glues the API client to the pure rendering layer.
//!
//! One component covers every page flavor; the behavioral differences are
//! configuration (render mode, refresh-vs-message after create, the hidden
//! value column) rather than separate code paths.
//!
//! HTTP rejections come back as `Notice` outcomes carrying fixed status
//! messages; transport failures on list/delete propagate as errors to the
//! command layer, which exits non-zero.

use metriq_core::error::{MetriqError, Result};
use metriq_core::model::MetricForm;
use metriq_core::render::{self, RenderMode, RenderOptions};

use crate::api::ApiClient;
use crate::config::ConsoleConfig;
use crate::prompt::Confirm;

/// Status-area message after a successful create in message mode.
pub const CREATED_NOTICE: &str = "Metric created successfully!";
/// Status-area message when the server rejects a create.
pub const CREATE_ERROR_NOTICE: &str = "Error creating metric.";
/// Status-area message when a create request never completes.
pub const NETWORK_ERROR_NOTICE: &str = "Network error. Please try again.";
/// Message when the server rejects a delete.
pub const DELETE_ERROR_NOTICE: &str = "Error deleting metric.";

/// Outcome of a create submission.
#[derive(Debug, PartialEq, Eq)]
pub enum CreateOutcome {
    /// Created and re-fetched; the fresh rendering.
    Refreshed(String),
    /// Fixed status message (success in message mode, or a surfaced error;
    /// on error the entered field values stay with the caller).
    Notice(&'static str),
}

/// Outcome of a delete request.
#[derive(Debug, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Confirmation declined: no request was sent, nothing changed.
    Declined,
    /// Deleted and re-fetched; the fresh rendering.
    Refreshed(String),
    /// Server rejected the delete; the view is left stale until the next
    /// load.
    Notice(&'static str),
}

pub struct View {
    api: ApiClient,
    mode: RenderMode,
    opts: RenderOptions,
    refresh_after_create: bool,
}

impl View {
    pub fn new(cfg: &ConsoleConfig) -> Self {
        Self {
            api: ApiClient::new(&cfg.api.base_url),
            mode: cfg.view.mode,
            opts: cfg.view.render_options(),
            refresh_after_create: cfg.view.refresh_after_create,
        }
    }

    /// Override the configured layout (CLI `--mode` flag).
    pub fn with_mode(mut self, mode: RenderMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Fetch the full collection and render it.
    pub async fn load_and_render(&self) -> Result<String> {
        let metrics = self.api.list().await?;
        tracing::debug!(count = metrics.len(), "collection fetched");
        Ok(render::render(&metrics, self.mode, &self.opts))
    }

    /// Parse the form fields and submit a create request.
    ///
    /// Field-level parse failures propagate as errors; HTTP and transport
    /// failures come back as the fixed status notices.
    pub async fn submit_create(&self, form: &MetricForm) -> Result<CreateOutcome> {
        let draft = form.draft()?;
        match self.api.create(&draft).await {
            Ok(()) => {
                tracing::info!(name = %draft.name, "metric created");
                if self.refresh_after_create {
                    Ok(CreateOutcome::Refreshed(self.load_and_render().await?))
                } else {
                    Ok(CreateOutcome::Notice(CREATED_NOTICE))
                }
            }
            Err(MetriqError::Network(e)) => {
                tracing::warn!(error = %e, "create request did not complete");
                Ok(CreateOutcome::Notice(NETWORK_ERROR_NOTICE))
            }
            Err(MetriqError::Api { status }) => {
                tracing::warn!(status, "create rejected");
                Ok(CreateOutcome::Notice(CREATE_ERROR_NOTICE))
            }
            Err(e) => Err(e),
        }
    }

    /// Ask for confirmation, then delete and re-fetch.
    ///
    /// A declined confirmation sends no request at all. A rejected delete
    /// does not refresh; a transport failure propagates.
    pub async fn request_delete(&self, id: i64, confirm: &dyn Confirm) -> Result<DeleteOutcome> {
        if !confirm.confirm(&format!("Delete metric {id}?")) {
            return Ok(DeleteOutcome::Declined);
        }
        match self.api.delete(id).await {
            Ok(()) => {
                tracing::info!(id, "metric deleted");
                Ok(DeleteOutcome::Refreshed(self.load_and_render().await?))
            }
            Err(MetriqError::Api { status }) => {
                tracing::warn!(id, status, "delete rejected");
                Ok(DeleteOutcome::Notice(DELETE_ERROR_NOTICE))
            }
            Err(MetriqError::NotFound(_)) => {
                tracing::warn!(id, "delete target not found");
                Ok(DeleteOutcome::Notice(DELETE_ERROR_NOTICE))
            }
            Err(e) => Err(e),
        }
    }
}
