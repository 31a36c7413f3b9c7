//! Terminal rendering of transcript lines.
//!
//! Bot replies go through `termimad` so the persona's `*stage directions*`
//! render as emphasis.

use console::style;
use termimad::MadSkin;

use mindcare_types::chat::{Message, Notice, ReplySource};

pub struct ChatRenderer {
    skin: MadSkin,
    bot_name: String,
}

impl ChatRenderer {
    pub fn new(bot_name: impl Into<String>) -> Self {
        let mut skin = MadSkin::default_dark();
        skin.italic.set_fg(termimad::crossterm::style::Color::Magenta);
        skin.bold.set_fg(termimad::crossterm::style::Color::Cyan);
        Self {
            skin,
            bot_name: bot_name.into(),
        }
    }

    /// Render a bot line as terminal-formatted markdown.
    pub fn render_reply(&self, text: &str) -> String {
        self.skin.term_text(text).to_string()
    }

    pub fn print_reply(&self, text: &str, source: Option<ReplySource>) {
        println!(
            "  {} {}",
            style(format!("{} >", self.bot_name)).cyan().bold(),
            self.render_reply(text).trim()
        );
        if let Some(source) = source.filter(|s| *s != ReplySource::Relay) {
            println!("  {}", style(format!("({source} reply)")).dim());
        }
        println!();
    }

    /// Print a transient notice (empty input, fallback used).
    pub fn print_notice(&self, notice: &Notice) {
        println!("  {} {}", style("!").yellow().bold(), style(&notice.text).yellow());
    }

    /// Print the whole transcript, one line per message.
    pub fn print_history(&self, messages: &[Message]) {
        println!();
        for msg in messages {
            let label = if msg.is_user {
                format!("{}", style("You").green().bold())
            } else {
                format!("{}", style(&self.bot_name).cyan().bold())
            };
            let preview: String = if msg.text.chars().count() > 100 {
                let head: String = msg.text.chars().take(97).collect();
                format!("{head}...")
            } else {
                msg.text.clone()
            };
            println!("  {label} {preview}");
        }
        println!();
    }
}
