//! Chat client logic.
//!
//! [`client::ChatClient`] owns one session and resolves each user line into
//! exactly one bot line: relay text first, then a keyword match, then a random
//! fallback. All state is session-scoped; nothing here is global.

pub mod client;
pub mod fallback;
pub mod relay;
pub mod session;
pub mod timer;
