//! Wire payloads exchanged between the chat client and the relay.
//!
//! The request field is `userMessage` on both sides.

use serde::{Deserialize, Serialize};

/// Generic error text returned by the relay for every failure.
pub const RELAY_FAILURE_MESSAGE: &str =
    "Failed to generate response. Even AI therapists need therapy sometimes.";

/// Body of `POST /generate-response`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelayRequest {
    pub user_message: String,
}

/// Successful relay reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayResponse {
    pub response: String,
}

/// Failure body, sent with HTTP 500.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayErrorBody {
    pub error: String,
}

/// Either shape the relay may answer with.
///
/// Used by clients that parse the body before looking at the status code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RelayReply {
    Success(RelayResponse),
    Failure(RelayErrorBody),
}
