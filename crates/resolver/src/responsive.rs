//! The responsive composer: a breakpoint prefix wrapped around the
//! variant composer (for `md:hover:x`) or the atomic resolver.

use crate::atomic;
use crate::rule::{StyleRule, class_selector};
use crate::variant;
use siftcss_scales as scales;

/// Resolves a `breakpoint:[variant:]base` token (`md:flex`,
/// `md:hover:bg-blue-600`).
pub fn resolve_responsive(token: &str) -> Option<StyleRule> {
    let (prefix, rest) = token.split_once(':')?;
    let media_query = scales::breakpoint(prefix)?;
    let mut rule = variant::with_display_token(rest, token).or_else(|| {
        atomic::declarations_for(rest).map(|declarations| StyleRule {
            selector: class_selector(token),
            declarations,
            media_query: None,
        })
    })?;
    // The breakpoint wins over whatever the inner composer set, which
    // for `md:dark:x` replaces the prefers-color-scheme query while the
    // `.dark` ancestor selector stays.
    rule.media_query = Some(media_query.to_string());
    Some(rule)
}
