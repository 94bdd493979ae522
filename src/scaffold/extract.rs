//! Pulls fenced code blocks out of model responses.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;

/// One fenced code block from a model response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    /// Language tag after the opening fence, lowercased. Empty when the
    /// fence carried no tag.
    pub language: String,
    pub content: String,
}

fn fence_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        // (?s) so the body can span lines; the language tag is whatever
        // follows the opening backticks up to the first newline.
        Regex::new(r"(?s)```([a-zA-Z0-9_+-]*)[ \t]*\r?\n(.*?)```")
            .unwrap_or_else(|e| panic!("invalid fence regex: {e}"))
    })
}

/// Extracts all fenced code blocks, merging blocks that share a language
/// tag in order of appearance.
///
/// Models frequently split one file across several fences of the same
/// language; joining them keeps the written file whole.
pub fn extract_code_blocks(response: &str) -> Vec<CodeBlock> {
    let mut merged: BTreeMap<String, String> = BTreeMap::new();
    let mut order: Vec<String> = Vec::new();

    for caps in fence_regex().captures_iter(response) {
        let language = caps
            .get(1)
            .map(|m| m.as_str().to_lowercase())
            .unwrap_or_default();
        let content = caps.get(2).map(|m| m.as_str()).unwrap_or_default();

        match merged.get_mut(&language) {
            Some(existing) => {
                if !existing.ends_with('\n') {
                    existing.push('\n');
                }
                existing.push_str(content);
            }
            None => {
                order.push(language.clone());
                merged.insert(language, content.to_string());
            }
        }
    }

    order
        .into_iter()
        .filter_map(|language| {
            merged.remove(&language).map(|content| CodeBlock {
                language,
                content: content.trim_end().to_string() + "\n",
            })
        })
        .collect()
}

/// Strips markdown emphasis characters (`*`, `_`, backtick, `~`) from a
/// single-line response such as a commit message.
pub fn strip_emphasis(text: &str) -> String {
    text.chars()
        .filter(|c| !matches!(c, '*' | '_' | '`' | '~'))
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extract_single_block() {
        let response = "Here is your component:\n```tsx\nexport const A = () => null;\n```\nDone.";
        let blocks = extract_code_blocks(response);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].language, "tsx");
        assert_eq!(blocks[0].content, "export const A = () => null;\n");
    }

    #[test]
    fn test_extract_merges_same_language() {
        let response = "```ts\nconst a = 1;\n```\ntext\n```ts\nconst b = 2;\n```";
        let blocks = extract_code_blocks(response);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].content, "const a = 1;\nconst b = 2;\n");
    }

    #[test]
    fn test_extract_preserves_language_order() {
        let response = "```tsx\n<div />\n```\n```scss\n.a { color: red; }\n```";
        let blocks = extract_code_blocks(response);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].language, "tsx");
        assert_eq!(blocks[1].language, "scss");
    }

    #[test]
    fn test_extract_untagged_fence() {
        let response = "```\nplain\n```";
        let blocks = extract_code_blocks(response);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].language, "");
        assert_eq!(blocks[0].content, "plain\n");
    }

    #[test]
    fn test_extract_no_fences() {
        assert!(extract_code_blocks("just prose, no code").is_empty());
    }

    #[test]
    fn test_strip_emphasis() {
        assert_eq!(
            strip_emphasis("**feat**: add `login` page_"),
            "feat: add login page"
        );
        assert_eq!(strip_emphasis("  fix: trim me  "), "fix: trim me");
        assert_eq!(strip_emphasis("~~chore~~"), "chore");
    }
}
