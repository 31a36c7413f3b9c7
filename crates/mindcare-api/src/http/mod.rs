//! HTTP surface of the relay.
//!
//! Axum router with permissive CORS, one generation endpoint, and a health
//! check. Every failure on the generation endpoint is a 500 with a fixed
//! `{ "error": ... }` body.

pub mod error;
pub mod handlers;
pub mod router;
