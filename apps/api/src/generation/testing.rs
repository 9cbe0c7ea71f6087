//! In-memory `TextGenerator` used by unit and HTTP tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::llm_client::{LlmError, TextGenerator};

#[derive(Clone)]
enum Reply {
    Text(Option<String>),
    Fail { status: u16, message: String },
}

/// Replays one canned reply for every call and records `(system, prompt)` pairs.
#[derive(Clone)]
pub struct StubGenerator {
    reply: Reply,
    calls: Arc<Mutex<Vec<(String, String)>>>,
}

impl StubGenerator {
    fn with_reply(reply: Reply) -> Self {
        Self {
            reply,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn text(text: &str) -> Self {
        Self::with_reply(Reply::Text(Some(text.to_string())))
    }

    pub fn empty() -> Self {
        Self::with_reply(Reply::Text(None))
    }

    pub fn failing(status: u16, message: &str) -> Self {
        Self::with_reply(Reply::Fail {
            status,
            message: message.to_string(),
        })
    }

    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for StubGenerator {
    async fn complete(&self, system: &str, prompt: &str) -> Result<Option<String>, LlmError> {
        self.calls
            .lock()
            .unwrap()
            .push((system.to_string(), prompt.to_string()));
        match &self.reply {
            Reply::Text(text) => Ok(text.clone()),
            Reply::Fail { status, message } => Err(LlmError::Api {
                status: *status,
                message: message.clone(),
            }),
        }
    }
}
