use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use intellisql::error::{GenerationError, Result};
use intellisql::port::outbound::llm::Llm;

/// Replays canned responses in order and records every prompt.
///
/// The last response repeats once the script runs out.
pub struct ScriptedLlm {
    responses: Mutex<VecDeque<String>>,
    last: Mutex<Option<String>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedLlm {
    pub fn new<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            responses: Mutex::new(responses.into_iter().map(Into::into).collect()),
            last: Mutex::new(None),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn always(response: &str) -> Self {
        Self::new([response])
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl Llm for ScriptedLlm {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn complete(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        let next = self.responses.lock().unwrap().pop_front();
        let mut last = self.last.lock().unwrap();
        if let Some(response) = next {
            *last = Some(response);
        }
        Ok(last.clone().unwrap_or_default())
    }
}

/// Fails every call the way an unreachable provider would.
pub struct UnavailableLlm;

#[async_trait]
impl Llm for UnavailableLlm {
    fn name(&self) -> &'static str {
        "unavailable"
    }

    async fn complete(&self, _prompt: &str) -> Result<String> {
        Err(GenerationError::Status {
            provider: "unavailable",
            status: 503,
            body: "service unavailable".to_string(),
        }
        .into())
    }
}
