//! Business logic for MindCare.
//!
//! - [`chat`]: session-scoped transcript, reply resolution and fallback tiers.
//! - [`llm`]: the provider abstraction the relay calls through.
//! - [`persona`]: built-in personas (prompt, greeting, canned lines).
//! - [`relay`]: prompt assembly and the single upstream call per request.

pub mod chat;
pub mod llm;
pub mod persona;
pub mod relay;
