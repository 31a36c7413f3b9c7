//! Welcome banner printed when a chat session starts.

use console::style;

/// Print the persona's name and tagline plus relay and session details.
pub fn print_welcome_banner(name: &str, tagline: &str, relay_url: &str, session_id: &str) {
    println!();
    println!("  {}", style(name).cyan().bold());
    println!("  {}", style(tagline).dim());
    println!();
    println!("  {}    {}", style("Relay:").bold(), style(relay_url).dim());
    println!(
        "  {}  {}",
        style("Session:").bold(),
        style(&session_id[..8.min(session_id.len())]).dim()
    );
    println!();
    println!("  {}", style("Type /help for commands, Ctrl+D to exit").dim());
    println!("  {}", style("---").dim());
    println!();
}
