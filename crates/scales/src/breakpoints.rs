//! The responsive breakpoint table.
//!
//! Kept as an ordered slice rather than a map: the manifest publishes
//! breakpoints smallest-first and five entries never justify hashing.

pub const BREAKPOINTS: &[(&str, &str)] = &[
    ("sm", "(min-width: 640px)"),
    ("md", "(min-width: 768px)"),
    ("lg", "(min-width: 1024px)"),
    ("xl", "(min-width: 1280px)"),
    ("2xl", "(min-width: 1536px)"),
];

/// Resolves a breakpoint name to its media query string.
pub fn breakpoint(name: &str) -> Option<&'static str> {
    BREAKPOINTS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, query)| *query)
}
