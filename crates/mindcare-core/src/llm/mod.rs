//! LLM provider abstraction.
//!
//! Concrete providers live in `mindcare-infra`; this module only defines the
//! trait and its type-erased wrapper.

pub mod box_provider;
pub mod provider;
