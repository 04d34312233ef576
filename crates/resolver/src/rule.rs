//! The resolved style rule and class-selector escaping.

use serde::{Deserialize, Serialize};

/// A single resolved style rule.
///
/// `selector` is always derived from the originating class token, with
/// every CSS-significant character escaped. A rule with no
/// `media_query` applies globally; otherwise it applies only inside
/// that media block.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StyleRule {
    pub selector: String,
    pub declarations: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_query: Option<String>,
}

/// Characters that must be backslash-escaped inside a class selector.
const ESCAPED: &[char] = &['.', ':', '/', '[', ']', '#', '%', '(', ')', '@', '!'];

/// Escapes a class token for use inside a CSS selector.
pub fn escape_class(token: &str) -> String {
    let mut out = String::with_capacity(token.len() + 4);
    for c in token.chars() {
        if ESCAPED.contains(&c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// The full class selector for a token (`"md:flex"` → `".md\:flex"`).
pub fn class_selector(token: &str) -> String {
    format!(".{}", escape_class(token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_grammar_characters() {
        assert_eq!(escape_class("p-4"), "p-4");
        assert_eq!(escape_class("md:hover:gap-x-2"), "md\\:hover\\:gap-x-2");
        assert_eq!(escape_class("w-1/2"), "w-1\\/2");
        assert_eq!(escape_class("w-[200px]"), "w-\\[200px\\]");
        assert_eq!(escape_class("bg-blue-500/50"), "bg-blue-500\\/50");
    }

    #[test]
    fn selector_prefixes_dot() {
        assert_eq!(class_selector("flex"), ".flex");
        assert_eq!(class_selector("w-1/2"), ".w-1\\/2");
    }
}
