//! Relay service.
//!
//! Builds the fixed two-message prompt (persona system prompt, then the
//! user's text), sends it to the configured provider once, and returns the
//! first completion's text. No retries.

use tracing::{Instrument, debug, info_span};

use mindcare_types::llm::{CompletionRequest, LlmError, Message};

use crate::llm::box_provider::BoxLlmProvider;
use crate::persona::Persona;

/// Stateless per-request relay logic shared by every HTTP handler invocation.
pub struct RelayService {
    provider: BoxLlmProvider,
    persona_name: String,
    system_prompt: String,
    model: String,
}

impl RelayService {
    /// `model` overrides the provider default when non-empty.
    pub fn new(provider: BoxLlmProvider, persona: &Persona, model: impl Into<String>) -> Self {
        let model = model.into();
        let model = if model.is_empty() {
            provider.default_model().to_string()
        } else {
            model
        };
        Self {
            provider,
            persona_name: persona.name.clone(),
            system_prompt: persona.system_prompt.clone(),
            model,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    pub fn persona_name(&self) -> &str {
        &self.persona_name
    }

    /// The exact request sent upstream for `user_message`.
    pub fn build_request(&self, user_message: &str) -> CompletionRequest {
        CompletionRequest {
            model: self.model.clone(),
            messages: vec![
                Message::system(self.system_prompt.clone()),
                Message::user(user_message),
            ],
            max_tokens: None,
            temperature: None,
        }
    }

    /// Call the provider and return the first completion's text.
    pub async fn generate(&self, user_message: &str) -> Result<String, LlmError> {
        let request = self.build_request(user_message);
        let span = info_span!(
            "chat",
            gen_ai.operation.name = "chat",
            gen_ai.provider.name = %self.provider.name(),
            gen_ai.request.model = %self.model,
            gen_ai.agent.name = %self.persona_name,
        );

        async {
            let response = self.provider.complete(&request).await?;
            debug!(
                gen_ai.response.id = %response.id,
                gen_ai.response.finish_reasons = %response.stop_reason,
                gen_ai.usage.input_tokens = response.usage.input_tokens,
                gen_ai.usage.output_tokens = response.usage.output_tokens,
                "completion received"
            );
            Ok::<_, LlmError>(response.content)
        }
        .instrument(span)
        .await
    }
}
