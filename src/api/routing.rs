use serde::Deserialize;
use super::ApiError;
use crate::models::RouteResult;

/// Success body of the route endpoint; extra fields (`start`, `end`) are ignored
#[derive(Debug, Deserialize)]
struct RouteResponse {
    path: Vec<String>,
    time_minutes: f64,
}

/// Failure body of either endpoint
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: Option<String>,
}

/// Parse and validate a successful route response body
///
/// # Errors
///
/// Returns `ApiError::Malformed` if the body is not JSON of the expected shape,
/// the path has fewer than two junctions, or the time is negative or not finite
pub fn parse_route_response(body: &str) -> Result<RouteResult, ApiError> {
    let response: RouteResponse = serde_json::from_str(body)
        .map_err(|e| ApiError::Malformed(format!("invalid route body: {e}")))?;

    if response.path.len() < 2 {
        return Err(ApiError::Malformed(format!(
            "route path has {} junction(s)",
            response.path.len()
        )));
    }
    if !response.time_minutes.is_finite() || response.time_minutes < 0.0 {
        return Err(ApiError::Malformed(format!("invalid travel time {}", response.time_minutes)));
    }

    Ok(RouteResult { path: response.path, time_minutes: response.time_minutes })
}

/// Extract the backend's `error` message from a failure body, if any
pub(super) fn parse_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .and_then(|r| r.error)
        .filter(|message| !message.is_empty())
}
