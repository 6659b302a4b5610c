use std::fmt;

use serde::{Deserialize, Serialize};

use crate::prompt::PromptTemplate;

/// One user-initiated fetch-and-summarize operation.
#[derive(Debug, Clone)]
pub struct ScrapeRequest {
    pub url: String,
    pub instruction: PromptTemplate,
    pub use_proxy: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyCandidate {
    pub address: String,
}

impl ProxyCandidate {
    pub fn proxy_url(&self) -> String {
        format!("http://{}", self.address)
    }
}

#[derive(Deserialize)]
pub(crate) struct ProxyListResponse {
    #[serde(default)]
    pub data: Vec<ProxyListEntry>,
}

#[derive(Deserialize)]
pub(crate) struct ProxyListEntry {
    #[serde(rename = "ipPort")]
    pub ip_port: String,
}

/// Text fragments of a page, one per matched element, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedContent {
    fragments: Vec<String>,
}

impl ExtractedContent {
    pub fn push(&mut self, fragment: String) {
        self.fragments.push(fragment);
    }

    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}

impl fmt::Display for ExtractedContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fragments.join("\n"))
    }
}

#[derive(Debug, Serialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<Message>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proxy_url() {
        let candidate = ProxyCandidate {
            address: "10.0.0.1:8080".to_string(),
        };
        assert_eq!(candidate.proxy_url(), "http://10.0.0.1:8080");
    }

    #[test]
    fn test_extracted_content_joins_lines() {
        let mut content = ExtractedContent::default();
        assert!(content.is_empty());
        content.push("Title".to_string());
        content.push("Link: Home (/)".to_string());

        assert_eq!(content.len(), 2);
        assert_eq!(content.to_string(), "Title\nLink: Home (/)");
    }

    #[test]
    fn test_chat_request_shape() {
        let request = ChatRequest {
            model: "gpt-3.5-turbo".into(),
            messages: vec![
                Message {
                    role: "system".into(),
                    content: "page".into(),
                },
                Message {
                    role: "user".into(),
                    content: "summarize".into(),
                },
            ],
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "gpt-3.5-turbo");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "summarize");
    }
}
