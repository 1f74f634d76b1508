use serde::Deserialize;

use metriq_core::error::{MetriqError, Result};
use metriq_core::render::{RenderMode, RenderOptions};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConsoleConfig {
    pub version: u32,

    #[serde(default)]
    pub api: ApiSection,

    #[serde(default)]
    pub view: ViewSection,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            version: 1,
            api: ApiSection::default(),
            view: ViewSection::default(),
        }
    }
}

impl ConsoleConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(MetriqError::BadRequest(format!(
                "unsupported config version: {}",
                self.version
            )));
        }

        self.api.validate()?;
        self.view.validate()?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiSection {
    /// Base endpoint of the metrics service; the client targets
    /// `{base_url}/metrics/`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiSection {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl ApiSection {
    pub fn validate(&self) -> Result<()> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(MetriqError::BadRequest(
                "api.base_url must start with http:// or https://".into(),
            ));
        }
        Ok(())
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000".into()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ViewSection {
    #[serde(default = "default_mode")]
    pub mode: RenderMode,

    /// VALUE column switch; the stock table layout hides it.
    #[serde(default)]
    pub show_value: bool,

    #[serde(default)]
    pub show_indicator: bool,

    /// When false, a successful create prints a notice instead of
    /// re-fetching the collection.
    #[serde(default = "default_refresh_after_create")]
    pub refresh_after_create: bool,

    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

impl Default for ViewSection {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            show_value: false,
            show_indicator: false,
            refresh_after_create: default_refresh_after_create(),
            placeholder: default_placeholder(),
        }
    }
}

impl ViewSection {
    pub fn validate(&self) -> Result<()> {
        if self.placeholder.is_empty() {
            return Err(MetriqError::BadRequest(
                "view.placeholder must not be empty".into(),
            ));
        }
        Ok(())
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            show_value: self.show_value,
            show_indicator: self.show_indicator,
            placeholder: self.placeholder.clone(),
        }
    }
}

fn default_mode() -> RenderMode {
    RenderMode::Table
}
fn default_refresh_after_create() -> bool {
    true
}
fn default_placeholder() -> String {
    "n/a".into()
}
