//! Parsing of non-streaming chat-completion responses.

use crate::error::{ChatError, Result};
use crate::message::{Message, Role};
use serde_json::Value;

/// Parse a complete response body into the assistant's message.
///
/// Requires `choices[0].message` with a known `role` and a string `content`.
pub fn parse_chat_response(body: &[u8]) -> Result<Message> {
    let json: Value = serde_json::from_slice(body)
        .map_err(|e| ChatError::JsonParse(format!("invalid JSON: {}", e)))?;

    let message = json
        .get("choices")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("message"))
        .ok_or_else(|| ChatError::JsonParse("missing choices[0].message".to_string()))?;

    let role = message
        .get("role")
        .and_then(Value::as_str)
        .ok_or_else(|| ChatError::JsonParse("missing message role".to_string()))?
        .parse::<Role>()
        .map_err(ChatError::JsonParse)?;

    let content = message
        .get("content")
        .and_then(Value::as_str)
        .ok_or_else(|| ChatError::JsonParse("missing message content".to_string()))?;

    Ok(Message::new(role, content))
}
