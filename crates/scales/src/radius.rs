//! The border-radius scale and corner shorthand expansion.

use phf::phf_map;

static RADII: phf::Map<&'static str, &'static str> = phf_map! {
    "none" => "0px",
    "sm" => "0.125rem",
    "DEFAULT" => "0.25rem",
    "md" => "0.375rem",
    "lg" => "0.5rem",
    "xl" => "0.75rem",
    "2xl" => "1rem",
    "3xl" => "1.5rem",
    "full" => "9999px",
};

/// Resolves a radius-scale token (`"lg"` → `"0.5rem"`).
pub fn radius(token: &str) -> Option<&'static str> {
    RADII.get(token).copied()
}

/// Whether the segment names a corner shorthand.
pub fn is_radius_corner(segment: &str) -> bool {
    matches!(segment, "tl" | "tr" | "bl" | "br" | "t" | "r" | "b" | "l")
}

/// Expands a corner shorthand to the physical corner names it covers.
pub fn radius_corner_sides(corner: &str) -> &'static [&'static str] {
    match corner {
        "tl" => &["top-left"],
        "tr" => &["top-right"],
        "bl" => &["bottom-left"],
        "br" => &["bottom-right"],
        "t" => &["top-left", "top-right"],
        "r" => &["top-right", "bottom-right"],
        "b" => &["bottom-left", "bottom-right"],
        "l" => &["top-left", "bottom-left"],
        _ => &[],
    }
}
