//! The client's view of the relay.

use mindcare_types::error::RelayError;

/// Something that turns a user line into assistant text.
///
/// The production implementation is `HttpRelayClient` in mindcare-infra.
pub trait RelayClient: Send + Sync {
    /// Ask the relay for a reply to `user_message`.
    ///
    /// An `Ok` with an empty string is a valid answer; the caller decides
    /// whether to fall back.
    fn generate(
        &self,
        user_message: &str,
    ) -> impl std::future::Future<Output = Result<String, RelayError>> + Send;
}
