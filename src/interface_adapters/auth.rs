use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use tracing::debug;

use crate::interface_adapters::handlers::{map_auth_error, ApiError};
use crate::interface_adapters::state::AppState;

pub const API_KEY_HEADER: &str = "x-api-key";

// Rejects requests that do not carry the configured API key.
pub async fn require_api_key(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let presented = request
        .headers()
        .get(API_KEY_HEADER)
        .map(|value| value.as_bytes());

    if let Err(err) = state.api_key.check(presented) {
        debug!(error = %err, path = %request.uri().path(), "request rejected");
        return Err(map_auth_error(err));
    }

    Ok(next.run(request).await)
}
