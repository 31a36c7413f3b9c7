//! Configuration types for MindCare.
//!
//! `MindcareConfig` represents the top-level `mindcare.toml` with one section
//! for the relay server and one for the chat client. Every field has a
//! default, so an empty or missing file is valid.

use serde::{Deserialize, Serialize};

use crate::chat::PersonaKind;

/// Top-level configuration, loaded from `~/.mindcare/mindcare.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MindcareConfig {
    #[serde(default)]
    pub relay: RelayConfig,

    #[serde(default)]
    pub client: ClientConfig,
}

/// Settings for `mindcare serve`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Chat-completion model sent upstream.
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL of the OpenAI-compatible API.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Name of the environment variable holding the upstream API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    #[serde(default)]
    pub persona: PersonaKind,

    /// Timeout for the upstream HTTP call.
    #[serde(default = "default_relay_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8787
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_api_key_env() -> String {
    "OPENAI_API_KEY".to_string()
}

fn default_relay_timeout_secs() -> u64 {
    60
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            model: default_model(),
            base_url: default_base_url(),
            api_key_env: default_api_key_env(),
            persona: PersonaKind::default(),
            request_timeout_secs: default_relay_timeout_secs(),
        }
    }
}

/// Settings for `mindcare chat`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Full URL of the relay endpoint.
    #[serde(default = "default_relay_url")]
    pub relay_url: String,

    /// Optional key sent as `apikey` and bearer token to a hosted relay.
    #[serde(default)]
    pub relay_api_key: Option<String>,

    #[serde(default)]
    pub persona: PersonaKind,

    /// Cosmetic "thinking" delay before a bot reply is shown.
    #[serde(default = "default_typing_delay_ms")]
    pub typing_delay_ms: u64,

    #[serde(default = "default_client_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_relay_url() -> String {
    format!("http://{}:{}/generate-response", default_host(), default_port())
}

fn default_typing_delay_ms() -> u64 {
    1500
}

fn default_client_timeout_secs() -> u64 {
    30
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            relay_url: default_relay_url(),
            relay_api_key: None,
            persona: PersonaKind::default(),
            typing_delay_ms: default_typing_delay_ms(),
            request_timeout_secs: default_client_timeout_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default_values() {
        let config = MindcareConfig::default();
        assert_eq!(config.relay.model, "gpt-4o-mini");
        assert_eq!(config.relay.port, 8787);
        assert_eq!(config.relay.api_key_env, "OPENAI_API_KEY");
        assert_eq!(config.client.typing_delay_ms, 1500);
        assert_eq!(
            config.client.relay_url,
            "http://127.0.0.1:8787/generate-response"
        );
    }

    #[test]
    fn test_config_deserialize_empty() {
        let config: MindcareConfig = toml::from_str("").unwrap();
        assert_eq!(config.relay.host, "127.0.0.1");
        assert_eq!(config.client.persona, PersonaKind::DrSarcasm);
    }

    #[test]
    fn test_config_deserialize_partial_sections() {
        let toml_str = r#"
[relay]
port = 9000
persona = "mindcare"

[client]
typing_delay_ms = 0
relay_url = "https://example.supabase.co/functions/v1/generate-response"
"#;
        let config: MindcareConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.relay.port, 9000);
        assert_eq!(config.relay.persona, PersonaKind::Mindcare);
        assert_eq!(config.relay.model, "gpt-4o-mini");
        assert_eq!(config.client.typing_delay_ms, 0);
        assert!(config.client.relay_url.ends_with("/generate-response"));
        assert!(config.client.relay_api_key.is_none());
    }
}
