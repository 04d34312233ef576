//! The spacing scale shared by padding, margin, and sizing utilities.

use phf::phf_map;

static SPACING: phf::Map<&'static str, &'static str> = phf_map! {
    "0" => "0px",
    "px" => "1px",
    "0.5" => "0.125rem",
    "1" => "0.25rem",
    "1.5" => "0.375rem",
    "2" => "0.5rem",
    "2.5" => "0.625rem",
    "3" => "0.75rem",
    "3.5" => "0.875rem",
    "4" => "1rem",
    "5" => "1.25rem",
    "6" => "1.5rem",
    "7" => "1.75rem",
    "8" => "2rem",
    "9" => "2.25rem",
    "10" => "2.5rem",
    "11" => "2.75rem",
    "12" => "3rem",
    "14" => "3.5rem",
    "16" => "4rem",
    "20" => "5rem",
    "24" => "6rem",
    "28" => "7rem",
    "32" => "8rem",
    "36" => "9rem",
    "40" => "10rem",
    "44" => "11rem",
    "48" => "12rem",
    "52" => "13rem",
    "56" => "14rem",
    "60" => "15rem",
    "64" => "16rem",
    "72" => "18rem",
    "80" => "20rem",
    "96" => "24rem",
    "auto" => "auto",
};

/// Resolves a spacing-scale token (`"4"` → `"1rem"`).
pub fn spacing(token: &str) -> Option<&'static str> {
    SPACING.get(token).copied()
}

#[cfg(test)]
mod tests {
    use super::spacing;

    #[test]
    fn scale_lookup() {
        assert_eq!(spacing("4"), Some("1rem"));
        assert_eq!(spacing("0"), Some("0px"));
        assert_eq!(spacing("px"), Some("1px"));
        assert_eq!(spacing("0.5"), Some("0.125rem"));
        assert_eq!(spacing("auto"), Some("auto"));
        assert_eq!(spacing("13"), None);
    }
}
