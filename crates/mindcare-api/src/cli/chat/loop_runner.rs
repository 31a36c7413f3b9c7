//! Main chat loop orchestration.
//!
//! Builds the HTTP relay client and the chat client, prints the banner and
//! greeting, then reads lines until EOF or `/exit`. Each accepted line is
//! submitted, a spinner runs while the reply resolves, and the reply is
//! printed with any fallback notice. A shutdown signal cuts the typing
//! delay short, prints the pending reply, and ends the session.

use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use mindcare_core::chat::client::ChatClient;
use mindcare_core::chat::timer::TypingTimer;
use mindcare_core::persona::Persona;
use mindcare_infra::relay_client::HttpRelayClient;
use mindcare_types::config::ClientConfig;

use crate::shutdown::{cancel_on, shutdown_signal};

use super::banner::print_welcome_banner;
use super::commands::{self, ChatCommand};
use super::input::{ChatInput, InputEvent};
use super::renderer::ChatRenderer;

fn typing_spinner(name: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .template("  {spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    spinner.set_style(style);
    spinner.set_message(format!("{name} is typing..."));
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

/// Run the interactive chat loop against the configured relay.
pub async fn run_chat_loop(config: &ClientConfig) -> anyhow::Result<()> {
    let persona = Persona::builtin(config.persona);
    let relay = HttpRelayClient::from_config(config)?;
    let timer = TypingTimer::new(Duration::from_millis(config.typing_delay_ms));
    let relay_url = relay.url().to_string();

    let mut client = ChatClient::new(persona, relay, StdRng::from_os_rng(), timer);
    let shutdown = client.timer().cancel_token();
    tokio::spawn(cancel_on(shutdown_signal(), shutdown.clone()));

    let renderer = ChatRenderer::new(client.persona().name.clone());
    let session_id = client.session().info().id.to_string();

    info!(
        session_id = %session_id,
        persona = %config.persona,
        relay_url = %relay_url,
        "chat session started"
    );

    print_welcome_banner(
        &client.persona().name,
        &client.persona().tagline,
        &relay_url,
        &session_id,
    );

    if let Some(greeting) = client.session().messages().first() {
        renderer.print_reply(&greeting.text, None);
    }

    let prompt = format!("  {} ", style("You >").green().bold());
    let (mut chat_input, _writer) = ChatInput::new(prompt)
        .map_err(|e| anyhow::anyhow!("Failed to initialize input: {e}"))?;

    loop {
        let event = tokio::select! {
            event = chat_input.read_line() => event,
            _ = shutdown.cancelled() => break,
        };
        let text = match event {
            InputEvent::Eof => break,
            InputEvent::Interrupted => {
                println!("  {}", style("Press Ctrl+D to exit, or keep chatting.").dim());
                continue;
            }
            InputEvent::Message(text) => text,
        };

        if let Some(cmd) = commands::parse(&text) {
            match cmd {
                ChatCommand::Help => commands::print_help(),
                ChatCommand::Clear => chat_input.clear(),
                ChatCommand::History => renderer.print_history(client.session().messages()),
                ChatCommand::Exit => break,
                ChatCommand::Unknown(name) => println!(
                    "  {} Unknown command: {}. Type /help for available commands.",
                    style("?").yellow().bold(),
                    style(name).dim()
                ),
            }
            continue;
        }

        let turn = match client.submit(&text) {
            Ok(turn) => turn,
            Err(e) => {
                renderer.print_notice(&client.rejection_notice(&e));
                continue;
            }
        };

        let spinner = typing_spinner(&client.persona().name);
        let outcome = client.resolve(turn).await;
        spinner.finish_and_clear();

        if let Some(notice) = &outcome.notice {
            renderer.print_notice(notice);
        }
        renderer.print_reply(&outcome.reply.text, Some(outcome.source));

        if shutdown.is_cancelled() {
            break;
        }
    }

    chat_input.flush();
    println!("\n  {}", style("Session ended.").dim());
    info!(
        session_id = %session_id,
        messages = client.session().len(),
        "chat session ended"
    );
    Ok(())
}
