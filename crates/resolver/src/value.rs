//! Low-level nom parsers for the value fragments of the token grammar:
//! hex colors, `N/M` fractions, opacity suffixes, and bracketed
//! arbitrary values.
//!
//! All parsers are total over the fragment they are handed: anything
//! short of a complete match is `None`, never an error. The resolver's
//! only failure mode is "no match".

use nom::Parser;
use nom::bytes::complete::{take_while1, take_while_m_n};
use nom::character::complete::{char, u8 as dec_u8, u32 as dec_u32};
use nom::combinator::{all_consuming, map_res};
use nom::sequence::{delimited, preceded, separated_pair};
use nom::IResult;

fn hex_primary(input: &str) -> IResult<&str, u8> {
    map_res(
        take_while_m_n(2, 2, |c: char| c.is_ascii_hexdigit()),
        |s: &str| u8::from_str_radix(s, 16),
    )
    .parse(input)
}

/// Decodes a `#rrggbb` hex color into its channels.
pub fn hex_to_rgb(input: &str) -> Option<(u8, u8, u8)> {
    let mut parser = all_consuming(preceded(char('#'), (hex_primary, hex_primary, hex_primary)));
    match parser.parse(input) {
        Ok((_, rgb)) => Some(rgb),
        Err(_) => None,
    }
}

/// Parses an opacity suffix value (`"50"` → 50); values above 100 are
/// out of grammar.
pub fn parse_opacity(input: &str) -> Option<u8> {
    let mut parser = all_consuming(dec_u8::<&str, nom::error::Error<&str>>);
    match parser.parse(input) {
        Ok((_, value)) if value <= 100 => Some(value),
        _ => None,
    }
}

/// Parses a sizing fraction (`"2/3"` → (2, 3)).
pub fn parse_fraction(input: &str) -> Option<(u32, u32)> {
    let mut parser = all_consuming(separated_pair(
        dec_u32::<&str, nom::error::Error<&str>>,
        char('/'),
        dec_u32,
    ));
    match parser.parse(input) {
        Ok((_, (n, d))) if d != 0 => Some((n, d)),
        _ => None,
    }
}

fn is_arbitrary_char(c: char) -> bool {
    // Whitelist for bracketed values: enough for lengths, percentages,
    // colors, and simple functions, and nothing that can close a
    // declaration or open a block.
    c.is_ascii_alphanumeric() || matches!(c, '.' | '%' | '#' | '-' | '+' | '_' | ',' | '(' | ')' | '/' | ' ')
}

/// Parses an arbitrary bracketed value (`"[200px]"` → `"200px"`).
pub fn parse_arbitrary(input: &str) -> Option<&str> {
    let mut parser = all_consuming(delimited(
        char::<&str, nom::error::Error<&str>>('['),
        take_while1(is_arbitrary_char),
        char(']'),
    ));
    match parser.parse(input) {
        Ok((_, value)) => Some(value),
        Err(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_decode() {
        assert_eq!(hex_to_rgb("#3b82f6"), Some((59, 130, 246)));
        assert_eq!(hex_to_rgb("#000000"), Some((0, 0, 0)));
        assert_eq!(hex_to_rgb("#fff"), None);
        assert_eq!(hex_to_rgb("transparent"), None);
    }

    #[test]
    fn opacity_bounds() {
        assert_eq!(parse_opacity("50"), Some(50));
        assert_eq!(parse_opacity("0"), Some(0));
        assert_eq!(parse_opacity("100"), Some(100));
        assert_eq!(parse_opacity("101"), None);
        assert_eq!(parse_opacity("5x"), None);
        assert_eq!(parse_opacity(""), None);
    }

    #[test]
    fn fractions() {
        assert_eq!(parse_fraction("1/2"), Some((1, 2)));
        assert_eq!(parse_fraction("2/3"), Some((2, 3)));
        assert_eq!(parse_fraction("1/0"), None);
        assert_eq!(parse_fraction("1/2/3"), None);
        assert_eq!(parse_fraction("full"), None);
    }

    #[test]
    fn arbitrary_values() {
        assert_eq!(parse_arbitrary("[200px]"), Some("200px"));
        assert_eq!(parse_arbitrary("[calc(100% - 2rem)]"), Some("calc(100% - 2rem)"));
        assert_eq!(parse_arbitrary("[]"), None);
        assert_eq!(parse_arbitrary("[a;b]"), None);
        assert_eq!(parse_arbitrary("200px"), None);
    }
}
