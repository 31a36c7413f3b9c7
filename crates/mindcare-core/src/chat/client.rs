//! Chat client: one session, one relay, one reply per user line.
//!
//! `send` is split into [`ChatClient::submit`] and [`ChatClient::resolve`] so
//! callers can render the typing indicator between the two.

use std::time::Instant;

use rand::Rng;
use tracing::{debug, info, warn};

use mindcare_types::chat::{Message, Notice, NoticeKind, ReplySource};
use mindcare_types::error::ChatError;

use super::fallback::FallbackResponder;
use super::relay::RelayClient;
use super::session::ChatSession;
use super::timer::{TimerOutcome, TypingTimer};
use crate::persona::Persona;

/// A user line that has been appended and is waiting for its reply.
#[must_use = "a pending turn must be resolved or the session stays in the typing state"]
#[derive(Debug)]
pub struct PendingTurn {
    text: String,
    submitted_at: Instant,
}

impl PendingTurn {
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Result of resolving one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendOutcome {
    /// The bot line that was appended.
    pub reply: Message,
    pub source: ReplySource,
    /// Transient notice to show next to the transcript, if any.
    pub notice: Option<Notice>,
}

/// Session-scoped chat client.
pub struct ChatClient<C, R> {
    persona: Persona,
    session: ChatSession,
    responder: FallbackResponder,
    relay: C,
    rng: R,
    timer: TypingTimer,
}

impl<C: RelayClient, R: Rng> ChatClient<C, R> {
    /// Create a client whose transcript opens with the persona's greeting.
    pub fn new(persona: Persona, relay: C, rng: R, timer: TypingTimer) -> Self {
        let session = ChatSession::with_greeting(persona.kind, &persona.greeting);
        let responder = FallbackResponder::from_persona(&persona);
        Self {
            persona,
            session,
            responder,
            relay,
            rng,
            timer,
        }
    }

    pub fn persona(&self) -> &Persona {
        &self.persona
    }

    pub fn session(&self) -> &ChatSession {
        &self.session
    }

    pub fn timer(&self) -> &TypingTimer {
        &self.timer
    }

    /// Notice to show for a rejected send.
    pub fn rejection_notice(&self, err: &ChatError) -> Notice {
        match err {
            ChatError::EmptyInput => Notice {
                kind: NoticeKind::EmptyInput,
                text: self.persona.empty_input_notice.clone(),
            },
        }
    }

    /// Validate and append the user line; the session is typing afterwards.
    pub fn submit(&mut self, text: &str) -> Result<PendingTurn, ChatError> {
        self.session.push_user(text)?;
        debug!(
            session_id = %self.session.info().id,
            chars = text.chars().count(),
            "user message appended"
        );
        Ok(PendingTurn {
            text: text.to_string(),
            submitted_at: Instant::now(),
        })
    }

    /// Resolve the reply for `turn`, wait the typing delay, append it.
    ///
    /// Never fails: relay errors degrade to a canned line plus a notice.
    pub async fn resolve(&mut self, turn: PendingTurn) -> SendOutcome {
        let (text, source, notice) = match self.relay.generate(&turn.text).await {
            Ok(reply) if !reply.trim().is_empty() => (reply, ReplySource::Relay, None),
            Ok(_) => {
                warn!(session_id = %self.session.info().id, "relay returned an empty response");
                self.fallback(&turn.text)
            }
            Err(e) => {
                warn!(session_id = %self.session.info().id, error = %e, "relay call failed");
                self.fallback(&turn.text)
            }
        };

        if self.timer.wait().await == TimerOutcome::Cancelled {
            debug!("typing delay cancelled");
        }

        self.session.push_reply(&text);
        info!(
            session_id = %self.session.info().id,
            source = %source,
            elapsed_ms = turn.submitted_at.elapsed().as_millis() as u64,
            "bot reply appended"
        );

        SendOutcome {
            reply: Message::bot(text),
            source,
            notice,
        }
    }

    /// `submit` followed by `resolve`.
    pub async fn send(&mut self, text: &str) -> Result<SendOutcome, ChatError> {
        let turn = self.submit(text)?;
        Ok(self.resolve(turn).await)
    }

    fn fallback(&mut self, user_text: &str) -> (String, ReplySource, Option<Notice>) {
        let (text, source) = self.responder.respond(user_text, &mut self.rng);
        let notice = Notice {
            kind: NoticeKind::FallbackUsed,
            text: self.persona.fallback_notice.clone(),
        };
        (text, source, Some(notice))
    }
}
