//! Token → rule resolution for the utility-class compiler.
//!
//! A class token follows the grammar
//! `[breakpoint:][variant:]base[-modifier][-shade][/opacity]`. The
//! atomic resolver handles the base; the variant and responsive
//! composers wrap it for state prefixes (`hover:`) and breakpoint
//! prefixes (`md:`), including the doubly-prefixed `md:hover:x` case.
//!
//! Resolution is pure and permissive: every entry point returns
//! `Option`, terminates for any input string, and never panics.
//! Unrecognized tokens are simply no match.

pub mod atomic;
pub mod responsive;
pub mod rule;
pub mod value;
pub mod variant;

pub use atomic::resolve_atomic;
pub use responsive::resolve_responsive;
pub use rule::{StyleRule, class_selector, escape_class};
pub use variant::resolve_variant;

/// Resolves any class token: responsive, then variant, then atomic.
pub fn resolve(token: &str) -> Option<StyleRule> {
    resolve_responsive(token)
        .or_else(|| resolve_variant(token))
        .or_else(|| resolve_atomic(token))
}

#[cfg(test)]
mod tests {
    use super::resolve;

    #[test]
    fn dispatches_across_composers() {
        assert_eq!(resolve("p-4").unwrap().declarations, "padding: 1rem");
        assert!(resolve("hover:bg-blue-600").unwrap().selector.contains(":hover"));
        assert_eq!(
            resolve("md:flex").unwrap().media_query.as_deref(),
            Some("(min-width: 768px)")
        );
        let rule = resolve("md:hover:bg-blue-600").unwrap();
        assert!(rule.selector.contains(":hover"));
        assert_eq!(rule.media_query.as_deref(), Some("(min-width: 768px)"));
    }

    #[test]
    fn no_match_is_silent() {
        assert!(resolve("unknown-class-xyz").is_none());
        assert!(resolve("md:").is_none());
        assert!(resolve(":").is_none());
        assert!(resolve("").is_none());
    }
}
