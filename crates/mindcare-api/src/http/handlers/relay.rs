//! `POST /generate-response`: the relay itself.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;

use mindcare_types::relay::{RelayRequest, RelayResponse};

use crate::http::error::AppError;
use crate::state::AppState;

/// Forward the user's text upstream and return the first completion.
///
/// The body is parsed by hand so a missing or wrong `Content-Type` is not a
/// separate failure mode: anything that is not `{ "userMessage": string }`
/// becomes the standard 500.
pub async fn generate_response(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<RelayResponse>, AppError> {
    let request: RelayRequest =
        serde_json::from_slice(&body).map_err(|e| AppError::BadPayload(e.to_string()))?;

    let relay = state.relay.as_ref().ok_or(AppError::MissingApiKey)?;
    let response = relay.generate(&request.user_message).await?;

    tracing::info!(
        persona = %state.persona_name,
        reply_chars = response.chars().count(),
        "relay reply generated"
    );
    Ok(Json(RelayResponse { response }))
}
