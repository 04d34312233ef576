//! The class-set compiler: an ordered token set in, a CSS string out.

use indexmap::{IndexMap, IndexSet};
use itertools::Itertools;
use siftcss_resolver::{StyleRule, resolve};

/// Compiles an ordered set of class tokens to CSS text.
///
/// Global rules come first, one line per rule, in token insertion
/// order; media-scoped rules follow, one `@media` block per query in
/// first-seen order, rules inside a block again in insertion order.
/// Unresolvable tokens are skipped silently. Empty input compiles to
/// the empty string. Output is deterministic for a given input order.
pub fn compile(tokens: &IndexSet<String>) -> String {
    let mut global: Vec<StyleRule> = Vec::new();
    let mut media_groups: IndexMap<String, Vec<StyleRule>> = IndexMap::new();
    let mut unresolved = 0usize;

    for token in tokens {
        match resolve(token) {
            Some(rule) => {
                if let Some(query) = rule.media_query.clone() {
                    media_groups.entry(query).or_default().push(rule);
                } else {
                    global.push(rule);
                }
            }
            None => unresolved += 1,
        }
    }
    if unresolved > 0 {
        log::debug!(
            "skipped {} of {} tokens with no matching rule",
            unresolved,
            tokens.len()
        );
    }

    let mut css = String::new();
    for rule in &global {
        css.push_str(&format!("{} {{ {}; }}\n", rule.selector, rule.declarations));
    }
    for (query, rules) in &media_groups {
        let body = rules
            .iter()
            .map(|rule| format!("  {} {{ {}; }}", rule.selector, rule.declarations))
            .join("\n");
        css.push_str(&format!("@media {} {{\n{}\n}}\n", query, body));
    }
    css
}

/// Convenience wrapper that builds the ordered set itself, giving
/// duplicate-free set semantics to any token iterator while keeping
/// first-seen order.
pub fn compile_tokens<'a, I>(tokens: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let set: IndexSet<String> = tokens.into_iter().map(str::to_string).collect();
    compile(&set)
}
