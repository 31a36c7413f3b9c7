//! Infrastructure implementations for MindCare.
//!
//! - [`llm`]: OpenAI-compatible chat-completion provider used by the relay.
//! - [`relay_client`]: HTTP client the chat front end uses to reach the relay.
//! - [`config`]: `mindcare.toml` loading and data directory resolution.
//! - [`secret`]: API key lookup from the environment.

pub mod config;
pub mod llm;
pub mod relay_client;
pub mod secret;
