//! Content extraction from streamed chat-completion chunks.

use serde_json::Value;

/// Pull `choices[0].delta.content` out of a data frame payload.
///
/// Providers send heterogeneous chunks (role-only deltas, empty deltas,
/// finish-reason-only chunks, usage trailers), so anything that does not
/// have this exact shape, including invalid JSON, yields `None` rather than
/// an error. An empty string is returned as `Some("")`.
pub fn extract_delta_content(payload: &[u8]) -> Option<String> {
    let json: Value = match serde_json::from_slice(payload) {
        Ok(v) => v,
        Err(e) => {
            log::trace!("skipping undecodable stream chunk: {}", e);
            return None;
        }
    };

    delta_content(&json).map(str::to_string)
}

fn delta_content(json: &Value) -> Option<&str> {
    json.get("choices")?
        .get(0)?
        .get("delta")?
        .get("content")?
        .as_str()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_content() {
        let payload = br#"{"id":"x","choices":[{"index":0,"delta":{"content":"Hi"}}]}"#;
        assert_eq!(extract_delta_content(payload).as_deref(), Some("Hi"));
    }

    #[test]
    fn test_tolerates_trailing_newline() {
        let payload = b"{\"choices\":[{\"delta\":{\"content\":\"Hi\"}}]}\n";
        assert_eq!(extract_delta_content(payload).as_deref(), Some("Hi"));
    }

    #[test]
    fn test_unescapes_content() {
        let payload = br#"{"choices":[{"delta":{"content":"a\nb \"q\" \u00e9"}}]}"#;
        assert_eq!(
            extract_delta_content(payload).as_deref(),
            Some("a\nb \"q\" \u{e9}")
        );
    }

    #[test]
    fn test_empty_content_is_some() {
        let payload = br#"{"choices":[{"delta":{"content":""}}]}"#;
        assert_eq!(extract_delta_content(payload).as_deref(), Some(""));
    }

    #[test]
    fn test_invalid_json_is_none() {
        assert_eq!(extract_delta_content(b"{not json"), None);
        assert_eq!(extract_delta_content(b""), None);
    }

    #[test]
    fn test_shape_mismatches_are_none() {
        let cases: &[&[u8]] = &[
            br#"{}"#,
            br#"{"choices":[]}"#,
            br#"{"choices":{}}"#,
            br#"{"choices":[{}]}"#,
            br#"{"choices":[{"delta":{}}]}"#,
            br#"{"choices":[{"delta":{"role":"assistant"}}]}"#,
            br#"{"choices":[{"delta":{"content":null}}]}"#,
            br#"{"choices":[{"delta":{"content":42}}]}"#,
            br#"{"choices":[{"delta":null,"finish_reason":"stop"}]}"#,
            br#"[1,2,3]"#,
        ];
        for payload in cases {
            assert_eq!(
                extract_delta_content(payload),
                None,
                "payload {}",
                String::from_utf8_lossy(payload)
            );
        }
    }

    #[test]
    fn test_only_first_choice_is_used() {
        let payload = br#"{"choices":[{"delta":{"role":"assistant"}},{"delta":{"content":"second"}}]}"#;
        assert_eq!(extract_delta_content(payload), None);
    }
}
