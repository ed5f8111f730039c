//! Client side of the routing/traffic backend

mod http;
mod routing;
mod traffic;

pub use http::HttpBackend;
pub use routing::parse_route_response;
pub use traffic::parse_traffic_response;

use std::fmt;
use crate::models::{RouteResult, TrafficSnapshot};

/// Why a backend call produced no usable data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response (unreachable host, CORS, aborted)
    Network(String),
    /// A non-success status, with the backend's `error` message when it sent one
    Backend { status: u16, message: Option<String> },
    /// A success status whose body does not have the expected shape
    Malformed(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(e) => write!(f, "Network error: {e}"),
            Self::Backend { message: Some(message), .. } => f.write_str(message),
            Self::Backend { status, message: None } => write!(f, "Request failed with status {status}"),
            Self::Malformed(e) => write!(f, "Unexpected response: {e}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Remote routing and traffic service
#[allow(async_fn_in_trait)]
pub trait Backend {
    /// Fastest route between two junctions
    async fn fetch_route(&self, start: &str, end: &str) -> Result<RouteResult, ApiError>;

    /// Live and reference travel times for every known road segment
    async fn fetch_traffic(&self) -> Result<TrafficSnapshot, ApiError>;
}
