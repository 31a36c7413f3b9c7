//! MindCare CLI entry point.
//!
//! Binary name: `mindcare`
//!
//! Parses CLI arguments, sets up tracing, loads `mindcare.toml`, then either
//! starts the response relay or the terminal chat client.

mod cli;
mod http;
mod shutdown;
mod state;

use std::path::Path;

use clap::Parser;
use clap_complete::generate;

use mindcare_core::persona::Persona;
use mindcare_infra::config::{load_config, resolve_data_dir, try_load_config};
use mindcare_observe::tracing_setup::{filter_for_verbosity, init_tracing, shutdown_tracing};
use mindcare_types::config::MindcareConfig;

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(filter_for_verbosity(cli.verbose, cli.quiet), cli.otel)
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {e}"))?;

    // Shell completions don't need config
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "mindcare", &mut std::io::stdout());
        return Ok(());
    }

    let config = load(cli.config.as_deref()).await?;

    match cli.command {
        Commands::Serve {
            port,
            host,
            persona,
            model,
        } => {
            let relay_config = cli::merge_relay_overrides(config.relay, host, port, persona, model);
            let persona = Persona::builtin(relay_config.persona);
            let state = AppState::init(&relay_config, &persona);

            let addr = format!("{}:{}", relay_config.host, relay_config.port);
            let listener = tokio::net::TcpListener::bind(&addr).await?;

            if !cli.quiet {
                println!(
                    "  {} {} relay listening on {}",
                    console::style("*").bold(),
                    console::style(&persona.name).cyan().bold(),
                    console::style(format!("http://{addr}/generate-response")).cyan()
                );
                if !state.is_ready() {
                    println!(
                        "  {} {} is not set; every request will fail",
                        console::style("!").yellow().bold(),
                        console::style(&relay_config.api_key_env).yellow()
                    );
                }
                println!("  {}", console::style("Press Ctrl+C to stop").dim());
            }

            let router = http::router::build_router(state);
            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown::shutdown_signal())
                .await?;

            if !cli.quiet {
                println!("\n  Relay stopped.");
            }
        }

        Commands::Chat {
            relay_url,
            relay_api_key,
            persona,
            typing_delay_ms,
        } => {
            let client_config = cli::merge_client_overrides(
                config.client,
                relay_url,
                relay_api_key,
                persona,
                typing_delay_ms,
            );
            cli::chat::loop_runner::run_chat_loop(&client_config).await?;
        }

        Commands::Completions { .. } => unreachable!("handled above"),
    }

    shutdown_tracing();
    Ok(())
}

/// Explicit `--config` must load; the default location falls back to defaults.
async fn load(explicit: Option<&Path>) -> anyhow::Result<MindcareConfig> {
    match explicit {
        Some(path) => Ok(try_load_config(path).await?),
        None => Ok(load_config(&resolve_data_dir()).await),
    }
}
