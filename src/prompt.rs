//! Instruction templates with a single slot for the scraped page content.

use crate::error::TemplateError;

/// Marker a user can place in their instruction to choose where the page content goes.
pub const CONTENT_PLACEHOLDER: &str = "{content}";

pub const SYSTEM_PREAMBLE: &str = "You are a helpful assistant that will understand the text from a website and represent it in a json format. Fullfil any commands by the user or ignore if its empty:\n";

/// Stands in for the page text in the user message; the page itself travels in the system message.
pub const PAGE_REFERENCE: &str = "(the webpage content is in the system message)";

const DEFAULT_BEFORE: &str = "Here is the scraped content from a webpage:\n";
const DEFAULT_AFTER: &str = "\nPlease summarize the main points.";

/// An instruction split around its one substitution point. `render` always
/// inserts the content exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    before: String,
    after: String,
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self {
            before: DEFAULT_BEFORE.to_string(),
            after: DEFAULT_AFTER.to_string(),
        }
    }
}

impl PromptTemplate {
    /// Builds a template from free-text user input.
    ///
    /// Empty input selects the default summarization instruction. Input without
    /// a `{content}` marker gets the content appended on its own line.
    pub fn from_user_input(input: &str) -> Result<Self, TemplateError> {
        let input = input.trim();
        if input.is_empty() {
            return Ok(Self::default());
        }

        let count = input.matches(CONTENT_PLACEHOLDER).count();
        match count {
            0 => Ok(Self {
                before: format!("{input}\n"),
                after: String::new(),
            }),
            1 => {
                let (before, after) = input
                    .split_once(CONTENT_PLACEHOLDER)
                    .unwrap_or((input, ""));
                Ok(Self {
                    before: before.to_string(),
                    after: after.to_string(),
                })
            }
            count => Err(TemplateError::TooManyPlaceholders { count }),
        }
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    pub fn render(&self, content: &str) -> String {
        let mut result = String::with_capacity(self.before.len() + content.len() + self.after.len());
        result.push_str(&self.before);
        result.push_str(content);
        result.push_str(&self.after);
        result
    }
}

pub fn build_system_prompt(content: &str) -> String {
    let mut result = String::with_capacity(SYSTEM_PREAMBLE.len() + content.len());
    result.push_str(SYSTEM_PREAMBLE);
    result.push_str(content);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_uses_default() {
        let template = PromptTemplate::from_user_input("   ").unwrap();
        assert!(template.is_default());
        assert_eq!(
            template.render("BODY"),
            "Here is the scraped content from a webpage:\nBODY\nPlease summarize the main points."
        );
    }

    #[test]
    fn test_plain_instruction_appends_content() {
        let template = PromptTemplate::from_user_input("List all prices").unwrap();
        assert!(!template.is_default());
        assert_eq!(template.render("BODY"), "List all prices\nBODY");
    }

    #[test]
    fn test_explicit_placeholder_position() {
        let template = PromptTemplate::from_user_input("Read this: {content} and list prices").unwrap();
        assert_eq!(template.render("BODY"), "Read this: BODY and list prices");
    }

    #[test]
    fn test_multiple_placeholders_rejected() {
        let err = PromptTemplate::from_user_input("{content} and {content}").unwrap_err();
        assert_eq!(err, TemplateError::TooManyPlaceholders { count: 2 });
    }

    #[test]
    fn test_placeholder_in_content_is_not_expanded() {
        let template = PromptTemplate::from_user_input("Summarize").unwrap();
        assert_eq!(template.render("{content}"), "Summarize\n{content}");
    }

    #[test]
    fn test_system_prompt_carries_content() {
        let prompt = build_system_prompt("Title\nBody");
        assert!(prompt.starts_with(SYSTEM_PREAMBLE));
        assert!(prompt.ends_with("Title\nBody"));
    }
}
