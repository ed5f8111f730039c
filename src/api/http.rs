use super::routing::parse_error_message;
use super::{parse_route_response, parse_traffic_response, ApiError, Backend};
use crate::constants::{ROUTE_ENDPOINT, TRAFFIC_ENDPOINT};
use crate::models::{RouteResult, TrafficSnapshot};

/// `Backend` over HTTP (the browser's `fetch` on wasm32)
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    api_base: String,
}

impl HttpBackend {
    #[must_use]
    pub fn new(api_base: impl Into<String>) -> Self {
        Self { client: reqwest::Client::new(), api_base: api_base.into() }
    }

    /// Issue a GET and return the body of a success response
    async fn get_body(&self, url: &str, query: &[(&str, &str)]) -> Result<String, ApiError> {
        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(format!("Failed to read response: {e}")))?;

        if status.is_success() {
            Ok(body)
        } else {
            Err(ApiError::Backend { status: status.as_u16(), message: parse_error_message(&body) })
        }
    }
}

impl Backend for HttpBackend {
    async fn fetch_route(&self, start: &str, end: &str) -> Result<RouteResult, ApiError> {
        let url = format!("{}{ROUTE_ENDPOINT}", self.api_base);
        let body = self.get_body(&url, &[("start", start), ("end", end)]).await?;
        parse_route_response(&body)
    }

    async fn fetch_traffic(&self) -> Result<TrafficSnapshot, ApiError> {
        let url = format!("{}{TRAFFIC_ENDPOINT}", self.api_base);
        let body = self.get_body(&url, &[]).await?;
        parse_traffic_response(&body)
    }
}
