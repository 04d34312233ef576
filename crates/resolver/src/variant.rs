//! The variant composer: a single pseudo-class/state prefix wrapped
//! around the atomic resolver.

use crate::atomic;
use crate::rule::{StyleRule, class_selector};

/// Resolves a `variant:base` token (`hover:bg-blue-600`).
pub fn resolve_variant(token: &str) -> Option<StyleRule> {
    with_display_token(token, token)
}

/// Resolves `token` but builds the selector from `display`, so the
/// responsive composer can strip its breakpoint prefix and still emit
/// a selector for the full original token.
pub(crate) fn with_display_token(token: &str, display: &str) -> Option<StyleRule> {
    let (prefix, rest) = token.split_once(':')?;
    let class = class_selector(display);
    let (selector, media_query) = match prefix {
        "hover" | "focus" | "active" | "focus-within" | "focus-visible" | "disabled" => {
            (format!("{}:{}", class, prefix), None)
        }
        // The element itself carries no pseudo-class; an ancestor with
        // the group class in the hovered state activates the rule.
        "group-hover" => (format!(".group:hover {}", class), None),
        // Dark mode is double-qualified: the `.dark` ancestor class and
        // the OS-level media feature both gate the rule. Kept as-is;
        // the responsive composer overwrites the media query when the
        // token also carries a breakpoint.
        "dark" => (
            format!(".dark {}", class),
            Some("(prefers-color-scheme: dark)".to_string()),
        ),
        _ => return None,
    };
    let declarations = atomic::declarations_for(rest)?;
    Some(StyleRule {
        selector,
        declarations,
        media_query,
    })
}
