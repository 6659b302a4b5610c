use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;

use crate::config::Config;
use crate::error::CompletionError;
use crate::models::{ChatRequest, ExtractedContent, Message};
use crate::prompt::{PAGE_REFERENCE, PromptTemplate, build_system_prompt};

pub fn build_chat_request(model: &str, content: &ExtractedContent, instruction: &PromptTemplate) -> ChatRequest {
    ChatRequest {
        model: model.into(),
        messages: vec![
            Message {
                role: "system".into(),
                content: build_system_prompt(&content.to_string()),
            },
            Message {
                role: "user".into(),
                content: instruction.render(PAGE_REFERENCE),
            },
        ],
    }
}

/// Sends the page content to the completion endpoint and returns the assistant's reply.
pub async fn call_openai(
    client: &Client,
    config: &Config,
    content: &ExtractedContent,
    instruction: &PromptTemplate,
) -> Result<String, CompletionError> {
    let body = build_chat_request(&config.model, content, instruction);
    let payload = serde_json::to_vec(&body).map_err(CompletionError::Serialize)?;
    tracing::debug!(model = %config.model, bytes = payload.len(), "sending completion request");

    let res = client
        .post(config.openai_api_url.clone())
        .header(CONTENT_TYPE, "application/json")
        .bearer_auth(&config.openai_api_key)
        .body(payload)
        .send()
        .await
        .map_err(CompletionError::Request)?;

    let status = res.status();
    let text = res.text().await.map_err(CompletionError::Request)?;

    if !status.is_success() {
        return Err(CompletionError::Status { status, body: text });
    }

    parse_reply(&text)
}

/// Pulls `choices[0].message.content` out of a completion response body.
pub fn parse_reply(body: &str) -> Result<String, CompletionError> {
    let json: Value = serde_json::from_str(body).map_err(CompletionError::Malformed)?;

    let choices = match json.get("choices").and_then(Value::as_array) {
        Some(choices) if !choices.is_empty() => choices,
        _ => return Err(shape("choices", &json)),
    };

    let first = &choices[0];
    if !first.is_object() {
        return Err(shape("first choice", first));
    }

    let message = first
        .get("message")
        .filter(|m| m.is_object())
        .ok_or_else(|| shape("message", first))?;

    message
        .get("content")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| shape("content", message))
}

fn shape(field: &'static str, found: &Value) -> CompletionError {
    CompletionError::Shape {
        field,
        found: found.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_extracted() {
        let reply = parse_reply(r#"{"choices":[{"message":{"role":"assistant","content":"HELLO"}}]}"#).unwrap();
        assert_eq!(reply, "HELLO");
    }

    #[test]
    fn test_missing_choices() {
        let err = parse_reply(r#"{"error":"nope"}"#).unwrap_err();
        assert!(matches!(err, CompletionError::Shape { field: "choices", .. }));
    }

    #[test]
    fn test_empty_choices() {
        let err = parse_reply(r#"{"choices":[]}"#).unwrap_err();
        assert!(matches!(err, CompletionError::Shape { field: "choices", .. }));
    }

    #[test]
    fn test_non_object_choice() {
        let err = parse_reply(r#"{"choices":["text"]}"#).unwrap_err();
        assert!(matches!(err, CompletionError::Shape { field: "first choice", .. }));
    }

    #[test]
    fn test_missing_message() {
        let err = parse_reply(r#"{"choices":[{"text":"hi"}]}"#).unwrap_err();
        assert!(matches!(err, CompletionError::Shape { field: "message", .. }));
    }

    #[test]
    fn test_non_string_content() {
        let err = parse_reply(r#"{"choices":[{"message":{"content":null}}]}"#).unwrap_err();
        assert!(matches!(err, CompletionError::Shape { field: "content", .. }));
    }

    #[test]
    fn test_invalid_json() {
        let err = parse_reply("<html>gateway timeout</html>").unwrap_err();
        assert!(matches!(err, CompletionError::Malformed(_)));
    }

    #[test]
    fn test_chat_request_messages() {
        let mut content = ExtractedContent::default();
        content.push("Heading".to_string());
        content.push("Image: /a.png".to_string());

        let request = build_chat_request("gpt-3.5-turbo", &content, &PromptTemplate::default());

        assert_eq!(request.model, "gpt-3.5-turbo");
        assert_eq!(request.messages[0].role, "system");
        assert!(request.messages[0].content.ends_with("Heading\nImage: /a.png"));
        assert_eq!(request.messages[1].role, "user");
        assert!(request.messages[1].content.contains("Please summarize the main points."));
        assert!(request.messages[1].content.contains(PAGE_REFERENCE));
        assert!(!request.messages[1].content.contains("Heading"));
    }
}
