//! The font-size scale: size keyword → (font-size, line-height).

use phf::phf_map;

static FONT_SIZES: phf::Map<&'static str, (&'static str, &'static str)> = phf_map! {
    "xs" => ("0.75rem", "1rem"),
    "sm" => ("0.875rem", "1.25rem"),
    "base" => ("1rem", "1.5rem"),
    "lg" => ("1.125rem", "1.75rem"),
    "xl" => ("1.25rem", "1.75rem"),
    "2xl" => ("1.5rem", "2rem"),
    "3xl" => ("1.875rem", "2.25rem"),
    "4xl" => ("2.25rem", "2.5rem"),
    "5xl" => ("3rem", "1"),
    "6xl" => ("3.75rem", "1"),
    "7xl" => ("4.5rem", "1"),
    "8xl" => ("6rem", "1"),
    "9xl" => ("8rem", "1"),
};

/// Resolves a font-size keyword to its (font-size, line-height) pair.
pub fn font_size(keyword: &str) -> Option<(&'static str, &'static str)> {
    FONT_SIZES.get(keyword).copied()
}

/// Whether the keyword names an entry on the font-size scale. Used to
/// keep `text-lg` and friends out of the color matcher.
pub fn is_font_size_keyword(keyword: &str) -> bool {
    FONT_SIZES.contains_key(keyword)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_lookup() {
        assert_eq!(font_size("2xl"), Some(("1.5rem", "2rem")));
        assert_eq!(font_size("9xl"), Some(("8rem", "1")));
        assert_eq!(font_size("10xl"), None);
    }

    #[test]
    fn keyword_set() {
        assert!(is_font_size_keyword("lg"));
        assert!(is_font_size_keyword("base"));
        assert!(!is_font_size_keyword("blue"));
    }
}
