use super::backend::ChatError;
use super::types::{ChatRequest, ChatResponse, ModelId};
use tracing::{info, warn};

/// Local state of the chat form.
///
/// The view renders from this struct and never mutates it directly; model and
/// message edits, `begin_submit` and `settle` are the only writers. The
/// in-flight flag is raised by `begin_submit` and always lowered by `settle`,
/// whatever the outcome.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatForm {
    model: ModelId,
    message: String,
    response: String,
    answered_by: Option<String>,
    in_flight: bool,
}

impl ChatForm {
    pub fn new(model: ModelId) -> Self {
        Self {
            model,
            message: String::new(),
            response: String::new(),
            answered_by: None,
            in_flight: false,
        }
    }

    pub fn model(&self) -> ModelId {
        self.model
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Last answer or error text.
    pub fn response(&self) -> &str {
        &self.response
    }

    /// Model the backend reported for the last answer, if it reported one.
    pub fn answered_by(&self) -> Option<&str> {
        self.answered_by.as_deref()
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn select_model(&mut self, model: ModelId) {
        self.model = model;
    }

    pub fn edit_message(&mut self, message: String) {
        self.message = message;
    }

    pub fn can_submit(&self) -> bool {
        !self.in_flight && !self.message.is_empty()
    }

    /// Marks the form busy and returns the request to send, or `None` when
    /// submitting is not allowed right now.
    pub fn begin_submit(&mut self) -> Option<ChatRequest> {
        if !self.can_submit() {
            return None;
        }

        self.in_flight = true;
        info!(
            model = %self.model,
            message_len = self.message.len(),
            "sending chat message"
        );
        Some(ChatRequest::new(self.model, self.message.clone()))
    }

    pub fn settle(&mut self, outcome: Result<ChatResponse, ChatError>) {
        self.in_flight = false;

        match outcome {
            Ok(reply) => {
                info!(response_len = reply.response.len(), "chat response received");
                self.response = reply.response;
                self.answered_by = reply.model;
            }
            Err(e) => {
                warn!("Chat request failed: {}", e);
                self.response = e.display_text();
                self.answered_by = None;
            }
        }
    }
}
