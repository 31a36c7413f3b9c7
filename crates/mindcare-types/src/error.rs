use thiserror::Error;

/// Errors raised by the chat client before any network call is made.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChatError {
    #[error("message is empty")]
    EmptyInput,
}

/// Errors from calling the relay endpoint.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("relay returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("relay reported an error: {0}")]
    Upstream(String),

    #[error("could not decode relay response: {0}")]
    Decode(String),
}

/// Errors from loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {message}")]
    Read { path: String, message: String },

    #[error("failed to parse {path}: {message}")]
    Parse { path: String, message: String },
}
