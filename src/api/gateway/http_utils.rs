//! Shared HTTP utilities for gateway implementations.

const MAX_MESSAGE_CHARS: usize = 160;

/// Extracts a human-readable message from an error response body.
///
/// JSON bodies carrying an `error` or `message` string are unwrapped; any
/// other non-empty body is used verbatim, truncated for display.
pub(super) fn extract_api_message(body: &str) -> Option<String> {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body)
        && let Some(message) = ["error", "message"]
            .iter()
            .find_map(|key| value.get(key).and_then(serde_json::Value::as_str))
    {
        return Some(message.to_owned());
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(truncate_for_message(trimmed, MAX_MESSAGE_CHARS))
    }
}

fn truncate_for_message(message: &str, max_chars: usize) -> String {
    let mut output = String::new();
    let mut chars = message.chars();

    for _ in 0..max_chars {
        let Some(character) = chars.next() else {
            return output;
        };
        output.push(character);
    }

    if chars.next().is_some() {
        output.push_str("...");
    }

    output
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{extract_api_message, truncate_for_message};

    #[rstest]
    #[case::error_key(r#"{"error":"review not found"}"#, Some("review not found"))]
    #[case::message_key(r#"{"message":"bad id"}"#, Some("bad id"))]
    #[case::plain_text("Internal Server Error", Some("Internal Server Error"))]
    #[case::empty("   ", None)]
    fn extracts_message_from_body(#[case] body: &str, #[case] expected: Option<&str>) {
        assert_eq!(extract_api_message(body).as_deref(), expected);
    }

    #[test]
    fn long_bodies_are_truncated() {
        let body = "x".repeat(200);
        let message = truncate_for_message(&body, 10);
        assert_eq!(message, "xxxxxxxxxx...");
    }
}
