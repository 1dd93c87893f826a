// ABOUTME: The prompt surface - a single default prompt steering the caller
// ABOUTME: toward organized answers that credit the tools they came from.

use std::collections::HashMap;

use crate::server::{ContentBlock, PromptArgument, PromptGetResult, PromptInfo, PromptMessage};

const DEFAULT_PROMPT: &str = "default_prompt";

const ASSISTANT_INSTRUCTIONS: &str = "You are a helpful data analysis assistant. \
Please clearly organize and return the results of the tool calling and the data analysis. \
When a statistic or figure came from a tool, say which tool produced it.";

/// List the prompts this server exposes.
pub fn list_prompts() -> Vec<PromptInfo> {
    vec![PromptInfo {
        name: DEFAULT_PROMPT.to_string(),
        description: "Instruction preamble for data-analysis conversations".to_string(),
        arguments: vec![PromptArgument {
            name: "message".to_string(),
            description: "The user's question".to_string(),
            required: true,
        }],
    }]
}

/// Render a prompt by name. Returns None for unknown prompt names.
pub fn get_prompt(
    name: &str,
    arguments: Option<&HashMap<String, String>>,
) -> Option<PromptGetResult> {
    if name != DEFAULT_PROMPT {
        return None;
    }

    let message = arguments
        .and_then(|args| args.get("message"))
        .cloned()
        .unwrap_or_default();

    Some(PromptGetResult {
        description: Some("Default data-analysis prompt".to_string()),
        messages: vec![
            PromptMessage {
                role: "assistant".to_string(),
                content: ContentBlock::Text {
                    text: ASSISTANT_INSTRUCTIONS.to_string(),
                },
            },
            PromptMessage {
                role: "user".to_string(),
                content: ContentBlock::Text { text: message },
            },
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_has_default_prompt() {
        let prompts = list_prompts();
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0].name, "default_prompt");
        assert!(prompts[0].arguments[0].required);
    }

    #[test]
    fn test_get_renders_user_message() {
        let mut args = HashMap::new();
        args.insert("message".to_string(), "describe sales.csv".to_string());

        let result = get_prompt("default_prompt", Some(&args)).unwrap();
        assert_eq!(result.messages.len(), 2);
        assert_eq!(result.messages[0].role, "assistant");
        assert_eq!(result.messages[1].role, "user");

        let ContentBlock::Text { text } = &result.messages[1].content;
        assert_eq!(text, "describe sales.csv");
    }

    #[test]
    fn test_unknown_prompt_is_none() {
        assert!(get_prompt("other_prompt", None).is_none());
    }
}
