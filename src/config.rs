use serde::{Deserialize, Serialize};
use std::time::Duration;
use crate::constants::{
    CONFIG_PATH, DEFAULT_API_BASE, DEFAULT_MAP_CENTER, DEFAULT_MAP_ZOOM, DEFAULT_TILE_ATTRIBUTION,
    DEFAULT_TILE_URL, DEFAULT_TRAFFIC_POLL_INTERVAL,
};

/// Runtime settings served alongside the client as `/config.json`
///
/// Every field has a default, so a partial (or absent) document still yields a
/// usable configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Origin of the routing/traffic backend, without a trailing slash
    pub api_base: String,
    pub traffic_poll_secs: u64,
    pub map_center: (f64, f64),
    pub map_zoom: f64,
    pub tile_url: String,
    pub tile_attribution: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            traffic_poll_secs: DEFAULT_TRAFFIC_POLL_INTERVAL.as_secs(),
            map_center: DEFAULT_MAP_CENTER,
            map_zoom: DEFAULT_MAP_ZOOM,
            tile_url: DEFAULT_TILE_URL.to_string(),
            tile_attribution: DEFAULT_TILE_ATTRIBUTION.to_string(),
        }
    }
}

impl ClientConfig {
    /// Parse a configuration document and normalise its values
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid JSON for this shape
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| format!("Failed to parse client config: {e}"))?;
        Ok(config.normalized())
    }

    /// Fetch `/config.json` from the page origin
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the status is not ok, or the body
    /// cannot be parsed
    pub async fn fetch() -> Result<Self, String> {
        let url = format!("{}{CONFIG_PATH}", page_origin()?);
        let response = reqwest::get(&url)
            .await
            .map_err(|e| format!("Request failed: {e}"))?;
        if !response.status().is_success() {
            return Err(format!("Config request returned {}", response.status()));
        }
        let config = response
            .json::<Self>()
            .await
            .map_err(|e| format!("Failed to parse client config: {e}"))?;
        Ok(config.normalized())
    }

    /// Fetch the configuration, falling back to defaults when it is unavailable
    pub async fn load() -> Self {
        match Self::fetch().await {
            Ok(config) => config,
            Err(e) => {
                crate::logging::log_warn!("Using default client config: {e}");
                Self::default()
            }
        }
    }

    #[must_use]
    pub fn traffic_poll_interval(&self) -> Duration {
        Duration::from_secs(self.traffic_poll_secs)
    }

    fn normalized(mut self) -> Self {
        let trimmed = self.api_base.trim_end_matches('/').len();
        self.api_base.truncate(trimmed);
        if self.traffic_poll_secs == 0 {
            self.traffic_poll_secs = DEFAULT_TRAFFIC_POLL_INTERVAL.as_secs();
        }
        self
    }
}

#[cfg(target_arch = "wasm32")]
fn page_origin() -> Result<String, String> {
    web_sys::window()
        .ok_or("No window available")?
        .location()
        .origin()
        .map_err(|_| "Page origin unavailable".to_string())
}

#[cfg(not(target_arch = "wasm32"))]
fn page_origin() -> Result<String, String> {
    Err("Page origin is only available in the browser".to_string())
}
