//! Shared domain types for MindCare.
//!
//! This crate contains the types shared by the chat client and the relay:
//! transcript messages, keyword responses, relay wire payloads, LLM request
//! shapes, configuration, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod llm;
pub mod relay;
