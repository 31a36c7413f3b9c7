//! Configuration for OpenAI-compatible providers.

use std::time::Duration;

use mindcare_types::config::RelayConfig;
use secrecy::SecretString;

/// Configuration for an OpenAI-compatible chat-completion endpoint.
///
/// Used to construct an [`super::OpenAiCompatibleProvider`]. Does not derive
/// Debug so the API key cannot end up in logs.
pub struct OpenAiCompatConfig {
    /// Human-readable provider name (e.g., "openai").
    pub provider_name: String,
    /// Base URL for the API (e.g., "https://api.openai.com/v1").
    pub base_url: String,
    pub api_key: SecretString,
    /// Model identifier (e.g., "gpt-4o-mini").
    pub model: String,
    /// Timeout applied to the underlying HTTP client.
    pub timeout: Duration,
}

/// Build a provider configuration from the relay section of `mindcare.toml`.
pub fn from_relay_config(relay: &RelayConfig, api_key: SecretString) -> OpenAiCompatConfig {
    let provider_name = if relay.base_url.contains("api.openai.com") {
        "openai"
    } else {
        "openai_compatible"
    };
    OpenAiCompatConfig {
        provider_name: provider_name.into(),
        base_url: relay.base_url.trim_end_matches('/').to_string(),
        api_key,
        model: relay.model.clone(),
        timeout: Duration::from_secs(relay.request_timeout_secs),
    }
}
