//! CLI command definitions for the `mindcare` binary.
//!
//! Uses clap derive macros for argument parsing. Flags override values from
//! `mindcare.toml`; a few of them also read environment variables.

pub mod chat;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use mindcare_types::chat::PersonaKind;
use mindcare_types::config::{ClientConfig, RelayConfig};

/// Sarcastic (or sincere) AI therapist: relay server and terminal chat.
#[derive(Parser)]
#[command(name = "mindcare", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Export spans to stdout through OpenTelemetry.
    #[arg(long, global = true)]
    pub otel: bool,

    /// Config file to use instead of `~/.mindcare/mindcare.toml`.
    #[arg(long, global = true, env = "MINDCARE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the response relay.
    Serve {
        /// Port to listen on.
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to.
        #[arg(long)]
        host: Option<String>,

        /// Persona whose system prompt is attached (dr-sarcasm, mindcare).
        #[arg(long)]
        persona: Option<PersonaKind>,

        /// Upstream chat-completion model.
        #[arg(long)]
        model: Option<String>,
    },

    /// Chat with the bot in the terminal.
    Chat {
        /// Relay endpoint URL.
        #[arg(long, env = "MINDCARE_RELAY_URL")]
        relay_url: Option<String>,

        /// Key sent to a hosted relay as `apikey` and bearer token.
        #[arg(long, env = "MINDCARE_RELAY_KEY", hide_env_values = true)]
        relay_api_key: Option<String>,

        /// Persona used for greeting and fallback lines.
        #[arg(long)]
        persona: Option<PersonaKind>,

        /// Cosmetic typing delay before each reply, in milliseconds.
        #[arg(long)]
        typing_delay_ms: Option<u64>,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

/// Apply `serve` flags on top of the `[relay]` section.
pub fn merge_relay_overrides(
    mut config: RelayConfig,
    host: Option<String>,
    port: Option<u16>,
    persona: Option<PersonaKind>,
    model: Option<String>,
) -> RelayConfig {
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }
    if let Some(persona) = persona {
        config.persona = persona;
    }
    if let Some(model) = model {
        config.model = model;
    }
    config
}

/// Apply `chat` flags on top of the `[client]` section.
pub fn merge_client_overrides(
    mut config: ClientConfig,
    relay_url: Option<String>,
    relay_api_key: Option<String>,
    persona: Option<PersonaKind>,
    typing_delay_ms: Option<u64>,
) -> ClientConfig {
    if let Some(url) = relay_url {
        config.relay_url = url;
    }
    if let Some(key) = relay_api_key {
        config.relay_api_key = Some(key);
    }
    if let Some(persona) = persona {
        config.persona = persona;
    }
    if let Some(delay) = typing_delay_ms {
        config.typing_delay_ms = delay;
    }
    config
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_serve_flags() {
        let cli = Cli::try_parse_from([
            "mindcare", "serve", "--port", "9000", "--persona", "mindcare",
        ])
        .unwrap();
        match cli.command {
            Commands::Serve { port, persona, host, .. } => {
                assert_eq!(port, Some(9000));
                assert_eq!(persona, Some(PersonaKind::Mindcare));
                assert!(host.is_none());
            }
            _ => panic!("expected serve"),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_persona() {
        assert!(Cli::try_parse_from(["mindcare", "chat", "--persona", "freud"]).is_err());
    }

    #[test]
    fn test_verbose_is_counted_globally() {
        let cli = Cli::try_parse_from(["mindcare", "chat", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_relay_overrides_replace_only_given_fields() {
        let merged = merge_relay_overrides(
            RelayConfig::default(),
            None,
            Some(9999),
            None,
            Some("gpt-4o".to_string()),
        );
        assert_eq!(merged.port, 9999);
        assert_eq!(merged.model, "gpt-4o");
        assert_eq!(merged.host, RelayConfig::default().host);
    }

    #[test]
    fn test_client_overrides_allow_zero_delay() {
        let merged = merge_client_overrides(
            ClientConfig::default(),
            Some("http://relay.test/generate-response".to_string()),
            None,
            Some(PersonaKind::Mindcare),
            Some(0),
        );
        assert_eq!(merged.typing_delay_ms, 0);
        assert_eq!(merged.relay_url, "http://relay.test/generate-response");
        assert_eq!(merged.persona, PersonaKind::Mindcare);
        assert!(merged.relay_api_key.is_none());
    }
}
