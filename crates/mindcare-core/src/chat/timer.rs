//! Cancellable "thinking" delay shown before a bot reply appears.
//!
//! Purely cosmetic. Cancelling skips whatever is left of the delay; the
//! caller still appends the reply.

use std::time::Duration;

use tokio_util::sync::CancellationToken;

/// How a [`TypingTimer::wait`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerOutcome {
    Elapsed,
    Cancelled,
}

/// Fixed-length delay that can be cut short through a [`CancellationToken`].
#[derive(Debug, Clone)]
pub struct TypingTimer {
    delay: Duration,
    cancel: CancellationToken,
}

impl TypingTimer {
    pub fn new(delay: Duration) -> Self {
        Self::with_cancellation(delay, CancellationToken::new())
    }

    /// Share an existing token, e.g. one cancelled on shutdown.
    pub fn with_cancellation(delay: Duration, cancel: CancellationToken) -> Self {
        Self { delay, cancel }
    }

    /// No delay at all.
    pub fn immediate() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Handle for cancelling pending and future waits.
    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Wait out the delay unless the token fires first.
    pub async fn wait(&self) -> TimerOutcome {
        if self.delay.is_zero() {
            return TimerOutcome::Elapsed;
        }
        tokio::select! {
            _ = self.cancel.cancelled() => TimerOutcome::Cancelled,
            _ = tokio::time::sleep(self.delay) => TimerOutcome::Elapsed,
        }
    }
}
