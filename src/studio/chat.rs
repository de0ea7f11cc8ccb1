//! Chat panel state machine: visibility states plus a per-send sub-state
//! that serializes outstanding assistant calls.

use thiserror::Error;

use crate::config::{ASSISTANT_APOLOGY, ASSISTANT_GREETING};
use crate::design::selection::DesignParams;
use crate::llm::assistant::ChatMessage;
use crate::llm::GatewayError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    Collapsed,
    Expanded,
    Minimized,
}

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("a chat message is already being sent")]
    SendInFlight,
    #[error("cannot send an empty message")]
    EmptyMessage,
    #[error("assistant reply failed: {0}")]
    ReplyFailed(String),
}

/// Payload for one assistant call: the new message and the transcript
/// snapshot taken before the message was appended.
#[derive(Debug, Clone)]
pub struct OutboundChat {
    pub message: String,
    pub history: Vec<ChatMessage>,
}

#[derive(Debug, Clone)]
pub struct ChatPanel {
    state: PanelState,
    transcript: Vec<ChatMessage>,
    sending: bool,
}

impl Default for ChatPanel {
    fn default() -> Self {
        ChatPanel {
            state: PanelState::Collapsed,
            transcript: vec![ChatMessage::assistant(ASSISTANT_GREETING)],
            sending: false,
        }
    }
}

impl ChatPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    pub fn is_sending(&self) -> bool {
        self.sending
    }

    pub fn open(&mut self) {
        self.state = PanelState::Expanded;
    }

    pub fn close(&mut self) {
        self.state = PanelState::Collapsed;
    }

    /// Toggles between expanded and minimized; a collapsed panel stays
    /// collapsed.
    pub fn toggle_minimized(&mut self) {
        self.state = match self.state {
            PanelState::Expanded => PanelState::Minimized,
            PanelState::Minimized => PanelState::Expanded,
            PanelState::Collapsed => PanelState::Collapsed,
        };
    }

    /// Appends the user message, enters `sending`, and returns the
    /// outbound payload. The history snapshot excludes the new message;
    /// the gateway appends it as the final user entry.
    pub fn begin_send(&mut self, text: &str) -> Result<OutboundChat, ChatError> {
        if self.sending {
            return Err(ChatError::SendInFlight);
        }
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ChatError::EmptyMessage);
        }

        let history = self.transcript.clone();
        self.transcript.push(ChatMessage::user(trimmed));
        self.sending = true;
        Ok(OutboundChat {
            message: trimmed.to_string(),
            history,
        })
    }

    /// Settles the in-flight send. A failed call appends the fixed
    /// apology so the user's message stays answered in the transcript.
    pub fn complete_send(&mut self, outcome: Result<String, GatewayError>) {
        match outcome {
            Ok(reply) => self.transcript.push(ChatMessage::assistant(reply)),
            Err(_) => self
                .transcript
                .push(ChatMessage::assistant(ASSISTANT_APOLOGY)),
        }
        self.sending = false;
    }

    /// Drives a full send round trip against the assistant gateway.
    pub async fn send(&mut self, text: &str, params: &DesignParams) -> Result<(), ChatError> {
        let outbound = self.begin_send(text)?;
        match crate::llm::assistant_reply(&outbound.message, params, &outbound.history).await {
            Ok(reply) => {
                self.complete_send(Ok(reply));
                Ok(())
            }
            Err(err) => {
                let message = err.to_string();
                self.complete_send(Err(err));
                Err(ChatError::ReplyFailed(message))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::assistant::ChatRole;

    #[test]
    fn panel_starts_collapsed_with_the_greeting() {
        let panel = ChatPanel::new();
        assert_eq!(panel.state(), PanelState::Collapsed);
        assert_eq!(panel.transcript().len(), 1);
        assert_eq!(panel.transcript()[0].role, ChatRole::Assistant);
        assert_eq!(panel.transcript()[0].content, ASSISTANT_GREETING);
    }

    #[test]
    fn minimize_toggle_only_applies_to_an_open_panel() {
        let mut panel = ChatPanel::new();
        panel.toggle_minimized();
        assert_eq!(panel.state(), PanelState::Collapsed);

        panel.open();
        panel.toggle_minimized();
        assert_eq!(panel.state(), PanelState::Minimized);
        panel.toggle_minimized();
        assert_eq!(panel.state(), PanelState::Expanded);
    }

    #[test]
    fn begin_send_snapshots_history_before_the_append() {
        let mut panel = ChatPanel::new();
        let outbound = panel.begin_send("rate this").expect("send accepted");
        assert_eq!(outbound.message, "rate this");
        // Snapshot holds only the greeting; the user entry lands in the
        // transcript for display.
        assert_eq!(outbound.history.len(), 1);
        assert_eq!(panel.transcript().len(), 2);
        assert_eq!(panel.transcript()[1].role, ChatRole::User);
        assert!(panel.is_sending());
    }

    #[test]
    fn overlapping_and_empty_sends_are_rejected() {
        let mut panel = ChatPanel::new();
        assert!(matches!(
            panel.begin_send("   "),
            Err(ChatError::EmptyMessage)
        ));
        panel.begin_send("first").expect("accepted");
        assert!(matches!(
            panel.begin_send("second"),
            Err(ChatError::SendInFlight)
        ));
    }

    #[test]
    fn failed_send_appends_the_apology_and_keeps_the_user_message() {
        let mut panel = ChatPanel::new();
        panel.begin_send("rate this").expect("accepted");
        panel.complete_send(Err(GatewayError::NoReply));

        let transcript = panel.transcript();
        assert_eq!(transcript.len(), 3);
        assert_eq!(transcript[1].content, "rate this");
        assert_eq!(transcript[2].content, ASSISTANT_APOLOGY);
        assert!(!panel.is_sending());
    }

    #[test]
    fn successful_send_appends_the_reply_in_order() {
        let mut panel = ChatPanel::new();
        panel.begin_send("rate this").expect("accepted");
        panel.complete_send(Ok("8/10, bold choice.".to_string()));

        let transcript = panel.transcript();
        assert_eq!(transcript.len(), 3);
        assert_eq!(transcript[1].role, ChatRole::User);
        assert_eq!(transcript[2].role, ChatRole::Assistant);
        assert_eq!(transcript[2].content, "8/10, bold choice.");

        // The next send carries the whole exchange as history.
        let outbound = panel.begin_send("and now?").expect("accepted");
        assert_eq!(outbound.history.len(), 3);
    }
}
