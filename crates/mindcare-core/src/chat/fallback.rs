//! Local reply tiers used when the relay gives nothing usable.
//!
//! Tier 1: first keyword entry (declaration order) with a keyword occurring
//! case-insensitively anywhere in the user text.
//! Tier 2: uniform random pick from the static fallback list.

use rand::Rng;
use rand::seq::IndexedRandom;

use mindcare_types::chat::{KeywordResponse, ReplySource};

use crate::persona::Persona;

/// Returned only if a persona was built with an empty fallback list.
const LAST_RESORT_LINE: &str = "I'm not sure what to say to that. Tell me more?";

/// Chooses a canned reply for a user line.
#[derive(Debug, Clone)]
pub struct FallbackResponder {
    keyword_responses: Vec<KeywordResponse>,
    fallbacks: Vec<String>,
}

impl FallbackResponder {
    pub fn new(keyword_responses: Vec<KeywordResponse>, fallbacks: Vec<String>) -> Self {
        Self {
            keyword_responses,
            fallbacks,
        }
    }

    pub fn from_persona(persona: &Persona) -> Self {
        Self::new(persona.keyword_responses.clone(), persona.fallbacks.clone())
    }

    /// Response of the first table entry matching `text`, if any.
    pub fn keyword_match(&self, text: &str) -> Option<&str> {
        let haystack = text.to_lowercase();
        self.keyword_responses
            .iter()
            .find(|entry| {
                entry
                    .keywords
                    .iter()
                    .filter(|k| !k.is_empty())
                    .any(|k| haystack.contains(&k.to_lowercase()))
            })
            .map(|entry| entry.response.as_str())
    }

    /// Uniformly random line from the static list.
    pub fn random_fallback<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        self.fallbacks
            .choose(rng)
            .map(String::as_str)
            .unwrap_or(LAST_RESORT_LINE)
    }

    /// Keyword tier, then random tier.
    pub fn respond<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> (String, ReplySource) {
        match self.keyword_match(text) {
            Some(response) => (response.to_string(), ReplySource::Keyword),
            None => (self.random_fallback(rng).to_string(), ReplySource::Fallback),
        }
    }

    pub fn fallbacks(&self) -> &[String] {
        &self.fallbacks
    }
}
