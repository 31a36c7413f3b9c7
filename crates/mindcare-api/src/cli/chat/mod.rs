//! Interactive terminal chat.
//!
//! Greeting, input loop, typing spinner, slash commands, and fallback
//! notices. Entry point: `loop_runner::run_chat_loop`.

pub mod banner;
pub mod commands;
pub mod input;
pub mod loop_runner;
pub mod renderer;
