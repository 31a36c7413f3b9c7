//! Relay application state.
//!
//! Holds the relay service behind an `Arc`. The service is absent when no
//! upstream key could be resolved at startup; the server still runs and
//! answers every generation request with the standard 500 error.

use std::sync::Arc;

use mindcare_core::persona::Persona;
use mindcare_core::relay::service::RelayService;
use mindcare_infra::llm::create_provider;
use mindcare_infra::secret::api_key_from_env;
use mindcare_types::config::RelayConfig;

/// Shared state for the relay handlers.
#[derive(Clone)]
pub struct AppState {
    pub relay: Option<Arc<RelayService>>,
    pub persona_name: String,
}

impl AppState {
    pub fn new(relay: Option<RelayService>, persona: &Persona) -> Self {
        Self {
            relay: relay.map(Arc::new),
            persona_name: persona.name.clone(),
        }
    }

    /// Resolve the API key from the environment and wire the provider.
    pub fn init(config: &RelayConfig, persona: &Persona) -> Self {
        let api_key = api_key_from_env(&config.api_key_env);
        if api_key.is_none() {
            tracing::warn!(
                env = %config.api_key_env,
                "no upstream API key found; every request will return an error"
            );
        }

        let relay = match create_provider(config, api_key) {
            Ok(provider) => Some(RelayService::new(provider, persona, config.model.clone())),
            Err(e) => {
                tracing::warn!(error = %e, "relay provider unavailable");
                None
            }
        };

        Self::new(relay, persona)
    }

    pub fn is_ready(&self) -> bool {
        self.relay.is_some()
    }
}
