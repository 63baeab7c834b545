//! API request building utilities.
//!
//! This module handles constructing the request body for chat-completion
//! calls from a conversation and its options.

use crate::message::Message;
use crate::options::ChatOptions;
use serde_json::json;

/// Build the request body for the chat-completions endpoint.
///
/// `stream` is only written when true; providers treat a missing field as
/// a non-streaming request.
pub fn build_request_body(
    messages: &[Message],
    options: &ChatOptions,
    stream: bool,
) -> serde_json::Value {
    let mut body = json!({
        "messages": messages,
        "model": options.model,
    });

    // Temperature
    if let Some(temp) = options.temperature {
        body["temperature"] = json!(temp);
    }

    // Top P
    if let Some(top_p) = options.top_p {
        body["top_p"] = json!(top_p);
    }

    if stream {
        body["stream"] = json!(true);
    }

    body
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_body() {
        let body = build_request_body(&[Message::user("hi")], &ChatOptions::new("m"), false);
        assert_eq!(
            body,
            json!({
                "messages": [{"role": "user", "content": "hi"}],
                "model": "m",
            })
        );
        assert!(body.get("stream").is_none());
    }

    #[test]
    fn test_stream_flag() {
        let body = build_request_body(&[Message::user("hi")], &ChatOptions::new("m"), true);
        assert_eq!(body["stream"], json!(true));
    }

    #[test]
    fn test_zero_temperature_is_sent() {
        let options = ChatOptions::new("m").with_temperature(0.0).with_top_p(0.5);
        let body = build_request_body(&[Message::user("hi")], &options, false);
        assert_eq!(body["temperature"], json!(0.0));
        assert_eq!(body["top_p"], json!(0.5));
    }

    #[test]
    fn test_conversation_order_preserved() {
        let messages = vec![
            Message::system("be brief"),
            Message::user("q1"),
            Message::assistant("a1"),
            Message::user("q2"),
        ];
        let body = build_request_body(&messages, &ChatOptions::default(), false);
        let roles: Vec<&str> = body["messages"]
            .as_array()
            .unwrap()
            .iter()
            .map(|m| m["role"].as_str().unwrap())
            .collect();
        assert_eq!(roles, vec!["system", "user", "assistant", "user"]);
    }
}
