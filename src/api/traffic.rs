use super::ApiError;
use crate::models::TrafficSnapshot;

/// Parse a successful traffic snapshot body
///
/// # Errors
///
/// Returns `ApiError::Malformed` if the body is not a `{ roads: [...] }` document
pub fn parse_traffic_response(body: &str) -> Result<TrafficSnapshot, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Malformed(format!("invalid traffic body: {e}")))
}
