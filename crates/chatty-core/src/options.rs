//! Per-request generation options.

use crate::error::{ChatError, Result};
use crate::message::Message;

pub const DEFAULT_MODEL: &str = "gpt-4o";

/// Options sent alongside the conversation.
///
/// `temperature` and `top_p` are optional because `0.0` is a meaningful
/// value for both; `None` leaves the provider default in place.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatOptions {
    pub model: String,
    pub temperature: Option<f64>,
    pub top_p: Option<f64>,
}

impl ChatOptions {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            temperature: None,
            top_p: None,
        }
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_top_p(mut self, top_p: f64) -> Self {
        self.top_p = Some(top_p);
        self
    }

    /// Check the options and conversation before anything goes on the wire.
    pub fn validate(&self, messages: &[Message]) -> Result<()> {
        if messages.is_empty() {
            return Err(ChatError::InvalidOptions(
                "at least one message is required".to_string(),
            ));
        }

        if self.model.trim().is_empty() {
            return Err(ChatError::InvalidOptions("model is required".to_string()));
        }

        if let Some(temp) = self.temperature
            && !(0.0..=2.0).contains(&temp)
        {
            return Err(ChatError::InvalidOptions(format!(
                "temperature {} is outside 0.0..=2.0",
                temp
            )));
        }

        if let Some(top_p) = self.top_p
            && !(0.0..=1.0).contains(&top_p)
        {
            return Err(ChatError::InvalidOptions(format!(
                "top_p {} is outside 0.0..=1.0",
                top_p
            )));
        }

        Ok(())
    }
}

impl Default for ChatOptions {
    fn default() -> Self {
        Self::new(DEFAULT_MODEL)
    }
}
