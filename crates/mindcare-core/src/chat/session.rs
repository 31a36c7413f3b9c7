//! Session-scoped transcript and typing state.
//!
//! The transcript is append-only. The typing flag is derived from the number
//! of user lines still waiting for their bot reply, so it is true exactly
//! while a reply is outstanding.

use mindcare_types::chat::{Message, PersonaKind, SessionInfo};
use mindcare_types::error::ChatError;

/// Visible conversation state for one user session.
#[derive(Debug)]
pub struct ChatSession {
    info: SessionInfo,
    messages: Vec<Message>,
    /// User lines appended whose bot reply has not been appended yet.
    pending_replies: usize,
}

impl ChatSession {
    /// Start an empty session.
    pub fn new(persona: PersonaKind) -> Self {
        Self {
            info: SessionInfo::new(persona),
            messages: Vec::new(),
            pending_replies: 0,
        }
    }

    /// Start a session that opens with the persona's greeting.
    pub fn with_greeting(persona: PersonaKind, greeting: &str) -> Self {
        let mut session = Self::new(persona);
        session.messages.push(Message::bot(greeting));
        session
    }

    pub fn info(&self) -> &SessionInfo {
        &self.info
    }

    /// Messages in transcript order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// True while at least one user line is waiting for its reply.
    pub fn is_typing(&self) -> bool {
        self.pending_replies > 0
    }

    /// Append a user line and open a pending reply.
    ///
    /// Blank or whitespace-only text is rejected without touching state.
    pub fn push_user(&mut self, text: &str) -> Result<(), ChatError> {
        if text.trim().is_empty() {
            return Err(ChatError::EmptyInput);
        }
        self.messages.push(Message::user(text));
        self.pending_replies += 1;
        Ok(())
    }

    /// Append the bot reply for the oldest pending user line.
    pub fn push_reply(&mut self, text: &str) {
        self.messages.push(Message::bot(text));
        self.pending_replies = self.pending_replies.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_idle() {
        let session = ChatSession::new(PersonaKind::DrSarcasm);
        assert!(session.is_empty());
        assert!(!session.is_typing());
    }

    #[test]
    fn test_greeting_is_first_bot_message() {
        let session = ChatSession::with_greeting(PersonaKind::Mindcare, "Hello there");
        assert_eq!(session.messages(), &[Message::bot("Hello there")]);
        assert!(!session.is_typing());
    }

    #[test]
    fn test_push_user_sets_typing_until_reply() {
        let mut session = ChatSession::new(PersonaKind::DrSarcasm);
        session.push_user("hello").unwrap();
        assert!(session.is_typing());
        assert_eq!(session.len(), 1);

        session.push_reply("hi");
        assert!(!session.is_typing());
        assert_eq!(
            session.messages(),
            &[Message::user("hello"), Message::bot("hi")]
        );
    }

    #[test]
    fn test_blank_input_rejected_without_state_change() {
        let mut session = ChatSession::with_greeting(PersonaKind::DrSarcasm, "hey");
        for blank in ["", "   ", "\t\n", " \r\n "] {
            assert_eq!(session.push_user(blank), Err(ChatError::EmptyInput));
        }
        assert_eq!(session.len(), 1);
        assert!(!session.is_typing());
    }

    #[test]
    fn test_interleaved_sends_keep_typing_until_all_replied() {
        let mut session = ChatSession::new(PersonaKind::DrSarcasm);
        session.push_user("one").unwrap();
        session.push_user("two").unwrap();
        session.push_reply("reply one");
        assert!(session.is_typing());
        session.push_reply("reply two");
        assert!(!session.is_typing());
        assert_eq!(session.len(), 4);
    }

    #[test]
    fn test_user_text_is_stored_verbatim() {
        let mut session = ChatSession::new(PersonaKind::DrSarcasm);
        session.push_user("  padded  ").unwrap();
        assert_eq!(session.messages()[0].text, "  padded  ");
    }
}
