//! Prompt construction for the commit, review and scaffolding flows.

use crate::constants::commit::{DEFAULT_LOCALE, MAX_MESSAGE_LENGTH};

/// Conventional-commit type table embedded into the commit prompt.
const COMMIT_TYPES_JSON: &str = r#"{
  "feat": "A new feature",
  "fix": "A bug fix",
  "docs": "Documentation only changes",
  "style": "Changes that do not affect the meaning of the code (white-space, formatting, missing semi-colons, etc)",
  "refactor": "A code change that neither fixes a bug nor adds a feature",
  "perf": "A code change that improves performance",
  "test": "Adding missing tests or correcting existing tests",
  "build": "Changes that affect the build system or external dependencies",
  "ci": "Changes to our CI configuration files and scripts",
  "chore": "Other changes that don't modify src or test files",
  "revert": "Reverts a previous commit"
}"#;

const REVIEW_SYSTEM_PROMPT: &str = r#"You are an expert code reviewer.

Review criteria:
1. Correctness: bugs or logical errors
2. Security: vulnerabilities
3. Performance: issues
4. Maintainability: readability and structure
5. Best practices

Respond in markdown. Group findings per file, most severe first, and end
with a short overall summary."#;

/// Settings for the commit message prompt.
#[derive(Debug, Clone)]
pub struct CommitPromptOptions {
    /// Message language, e.g. "en" or "zh-CN".
    pub locale: String,
    /// Maximum message length in characters.
    pub max_length: usize,
}

impl Default for CommitPromptOptions {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_string(),
            max_length: MAX_MESSAGE_LENGTH,
        }
    }
}

/// System prompt for commit message generation.
///
/// The diff itself travels in the user message; everything here is the
/// static instruction set.
pub fn commit_system_prompt(options: &CommitPromptOptions) -> String {
    [
        "Generate a concise git commit message written in present tense for the following code diff with the given specifications below:".to_string(),
        format!("Message language: {}", options.locale),
        format!(
            "Commit message must be a maximum of {} characters.",
            options.max_length
        ),
        "Exclude anything unnecessary such as translation. Your entire response will be passed directly into git commit.".to_string(),
        format!(
            "Choose a type from the type-to-description JSON below that best describes the git diff:\n{}",
            COMMIT_TYPES_JSON
        ),
        "Combine the context of the changed content and the programming language used to objectively and accurately explain the commit.".to_string(),
        "The output response must be in format:\n<type>(<optional scope>): <commit message>".to_string(),
    ]
    .join("\n")
}

/// System prompt for the code review flow.
pub fn review_system_prompt() -> &'static str {
    REVIEW_SYSTEM_PROMPT
}

/// User selections gathered before scaffolding a component.
#[derive(Debug, Clone)]
pub struct ComponentSelection {
    pub framework: String,
    pub language: String,
    pub css_flavor: String,
    pub description: String,
}

/// User selections gathered before scaffolding a hook.
#[derive(Debug, Clone)]
pub struct HookSelection {
    pub framework: String,
    pub language: String,
    pub description: String,
}

/// User prompt asking the model for a UI component.
pub fn component_prompt(selection: &ComponentSelection) -> String {
    format!(
        "Please generate a UI component based on the following information:\n\
         \n\
         Framework: {}\n\
         Programming Language: {}\n\
         Styling: {}\n\
         \n\
         Description: {}\n\
         \n\
         Requirements:\n\
         1. Provide a complete code implementation in fenced code blocks.\n\
         2. Put the styles in a separate {} code block.\n\
         3. Do not include usage examples or explanations outside the code blocks.",
        selection.framework,
        selection.language,
        selection.css_flavor,
        selection.description,
        selection.css_flavor,
    )
}

/// User prompt asking the model for a custom hook.
pub fn hook_prompt(selection: &HookSelection) -> String {
    format!(
        "Please generate a custom Hook based on the following information:\n\
         \n\
         Framework: {}\n\
         Programming Language: {}\n\
         \n\
         Description: {}\n\
         \n\
         Requirements:\n\
         1. Provide a complete code implementation.\n\
         2. Include Hook definition and state management (if applicable).\n\
         3. Add doc comments, but do not include usage examples.\n\
         4. Only return the custom Hook function, do not return usage examples.",
        selection.framework, selection.language, selection.description,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_system_prompt_defaults() {
        let prompt = commit_system_prompt(&CommitPromptOptions::default());
        assert!(prompt.contains("Message language: en"));
        assert!(prompt.contains("maximum of 200 characters"));
        assert!(prompt.contains("\"feat\""));
        assert!(prompt.contains("<type>(<optional scope>): <commit message>"));
    }

    #[test]
    fn test_commit_system_prompt_custom_locale() {
        let options = CommitPromptOptions {
            locale: "zh-CN".to_string(),
            max_length: 72,
        };
        let prompt = commit_system_prompt(&options);
        assert!(prompt.contains("Message language: zh-CN"));
        assert!(prompt.contains("maximum of 72 characters"));
    }

    #[test]
    fn test_component_prompt_mentions_selections() {
        let selection = ComponentSelection {
            framework: "React".to_string(),
            language: "TypeScript".to_string(),
            css_flavor: "scss".to_string(),
            description: "a pagination bar".to_string(),
        };
        let prompt = component_prompt(&selection);
        assert!(prompt.contains("Framework: React"));
        assert!(prompt.contains("scss"));
        assert!(prompt.contains("a pagination bar"));
    }

    #[test]
    fn test_hook_prompt_mentions_selections() {
        let selection = HookSelection {
            framework: "Vue".to_string(),
            language: "JavaScript".to_string(),
            description: "debounced window size".to_string(),
        };
        let prompt = hook_prompt(&selection);
        assert!(prompt.contains("Framework: Vue"));
        assert!(prompt.contains("debounced window size"));
    }
}
