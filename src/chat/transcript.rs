use super::error::ChatError;

/// Provisional assistant text shown while a completion is in flight.
pub const PLACEHOLDER: &str = "Thinking…";

/// What the log shows when a completion fails; details go to the toast.
pub const ERROR_REPLY: &str = "Something went wrong. Check your API key and your connection.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn label(self) -> &'static str {
        match self {
            Role::User => "You",
            Role::Assistant => "Fitapp AI",
        }
    }

    /// BEM modifier, `msg--user` / `msg--assistant`.
    pub fn class(self) -> &'static str {
        match self {
            Role::User => "msg--user",
            Role::Assistant => "msg--assistant",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub id: u64,
    pub role: Role,
    pub text: String,
}

/// A submitted prompt whose completion has not come back yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingTurn {
    pub prompt: String,
    placeholder_id: u64,
}

/// Ordered chat transcript plus the single in-flight turn, if any.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
    next_id: u64,
    pending: Option<u64>,
}

impl ChatLog {
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_waiting(&self) -> bool {
        self.pending.is_some()
    }

    pub fn push(&mut self, role: Role, text: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(ChatMessage {
            id,
            role,
            text: text.into(),
        });
        id
    }

    /// Records the user's message and the placeholder reply. Returns `None`
    /// (and changes nothing) for blank input or while another turn is still
    /// waiting for its completion.
    pub fn begin_turn(&mut self, input: &str) -> Option<PendingTurn> {
        let prompt = input.trim();
        if prompt.is_empty() || self.is_waiting() {
            return None;
        }
        self.push(Role::User, prompt);
        let placeholder_id = self.push(Role::Assistant, PLACEHOLDER);
        self.pending = Some(placeholder_id);
        Some(PendingTurn {
            prompt: prompt.to_string(),
            placeholder_id,
        })
    }

    /// Settles `turn` with the completion result. Returns the message to
    /// toast when the completion failed.
    pub fn finish_turn(&mut self, turn: PendingTurn, result: Result<String, ChatError>) -> Option<String> {
        if self.pending == Some(turn.placeholder_id) {
            self.pending = None;
        }
        match result {
            Ok(reply) => {
                self.settle(turn.placeholder_id, reply);
                None
            }
            Err(e) => {
                self.settle(turn.placeholder_id, ERROR_REPLY.to_string());
                Some(e.to_string())
            }
        }
    }

    // The placeholder is only overwritten while it is still the last message
    // and untouched; otherwise the reply goes at the end.
    fn settle(&mut self, placeholder_id: u64, text: String) {
        match self.messages.last_mut() {
            Some(last) if last.id == placeholder_id && last.text == PLACEHOLDER => last.text = text,
            _ => {
                self.push(Role::Assistant, text);
            }
        }
    }
}
