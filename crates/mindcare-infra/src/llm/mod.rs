//! LLM provider implementations.
//!
//! [`create_provider`] turns the relay configuration plus a resolved API key
//! into a [`BoxLlmProvider`].

pub mod openai_compat;

use secrecy::SecretString;

use mindcare_core::llm::box_provider::BoxLlmProvider;
use mindcare_types::config::RelayConfig;
use mindcare_types::llm::LlmError;

use self::openai_compat::OpenAiCompatibleProvider;

/// Create a [`BoxLlmProvider`] from the relay configuration.
///
/// # Errors
///
/// Returns [`LlmError::AuthenticationFailed`] when no API key is available.
pub fn create_provider(
    relay: &RelayConfig,
    api_key: Option<SecretString>,
) -> Result<BoxLlmProvider, LlmError> {
    let key = api_key.ok_or(LlmError::AuthenticationFailed)?;
    let config = openai_compat::config::from_relay_config(relay, key);
    let provider = OpenAiCompatibleProvider::new(config)?;
    Ok(BoxLlmProvider::new(provider))
}
