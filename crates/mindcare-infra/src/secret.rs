//! Environment variable API key lookup.
//!
//! The relay reads its upstream key once at startup. Empty values count as
//! missing so a blank `OPENAI_API_KEY=` does not produce bearer headers with
//! no token.

use secrecy::SecretString;

/// Read `var` from the process environment.
pub fn api_key_from_env(var: &str) -> Option<SecretString> {
    api_key_with(var, |key| std::env::var(key).ok())
}

/// Same as [`api_key_from_env`] with an injectable lookup.
pub fn api_key_with<F>(var: &str, lookup: F) -> Option<SecretString>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(var)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .map(SecretString::from)
}
