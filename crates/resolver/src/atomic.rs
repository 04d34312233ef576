//! The atomic rule resolver: one base token (no variant or breakpoint
//! prefix) to one rule, via an ordered list of category matchers.

use crate::rule::{StyleRule, class_selector};
use crate::value;
use siftcss_scales as scales;

/// The matcher chain, first match wins. Order matters: the color
/// matcher must run before the static table so `bg-blue-500` never
/// falls through, and the static table catches `text-center` and
/// friends that the color matcher explicitly excludes.
const MATCHERS: &[fn(&str) -> Option<String>] = &[
    match_color,
    match_text_size,
    match_spacing,
    match_sizing,
    match_max_width,
    match_radius,
    match_static,
];

/// Resolves a base token to its declarations, or `None`.
pub(crate) fn declarations_for(token: &str) -> Option<String> {
    MATCHERS.iter().find_map(|matcher| matcher(token))
}

/// Resolves a base token to a full rule. Pure; never panics.
pub fn resolve_atomic(token: &str) -> Option<StyleRule> {
    let declarations = declarations_for(token)?;
    Some(StyleRule {
        selector: class_selector(token),
        declarations,
        media_query: None,
    })
}

// --- Color: bg|text|border-{color}[-{shade}][/{opacity}] ---

fn match_color(token: &str) -> Option<String> {
    let (prefix, rest) = token.split_once('-')?;
    let property = match prefix {
        "bg" => "background-color",
        "text" => "color",
        "border" => "border-color",
        _ => return None,
    };
    let (rest, opacity) = match rest.split_once('/') {
        Some((color, suffix)) => (color, Some(value::parse_opacity(suffix)?)),
        None => (rest, None),
    };
    // `text-lg` is a font size and `text-center` an alignment, not
    // colors named "lg" or "center".
    if prefix == "text"
        && (scales::is_font_size_keyword(rest) || scales::is_text_align_keyword(rest))
    {
        return None;
    }
    let hex = resolve_hex(rest)?;
    let css_value = match opacity {
        Some(opacity) => {
            let (r, g, b) = value::hex_to_rgb(hex)?;
            format!("rgba({}, {}, {}, {})", r, g, b, opacity as f32 / 100.0)
        }
        None => hex.to_string(),
    };
    Some(format!("{}: {}", property, css_value))
}

/// `blue-500` → explicit shade; `blue` → default shade; `white` →
/// its `DEFAULT` entry. Unknown name or shade is no match.
fn resolve_hex(rest: &str) -> Option<&'static str> {
    if let Some((name, shade)) = rest.rsplit_once('-') {
        if let Some(hex) = scales::color_hex(name, shade) {
            return Some(hex);
        }
    }
    scales::color_hex(rest, scales::default_shade(rest)?)
}

// --- Text size: text-{xs..9xl|base} ---

fn match_text_size(token: &str) -> Option<String> {
    let keyword = token.strip_prefix("text-")?;
    let (font_size, line_height) = scales::font_size(keyword)?;
    Some(format!("font-size: {}; line-height: {}", font_size, line_height))
}

// --- Spacing: [-]p|m[x|y|t|r|b|l]-{scale|[arbitrary]} ---

fn match_spacing(token: &str) -> Option<String> {
    let (negative, token) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token),
    };
    let (head, raw) = token.split_once('-')?;
    let mut head_chars = head.chars();
    let property = match head_chars.next()? {
        'p' => "padding",
        'm' => "margin",
        _ => return None,
    };
    // Only margins may be negative.
    if negative && property != "margin" {
        return None;
    }
    let direction = head_chars.next();
    if head_chars.next().is_some() {
        return None;
    }
    let resolved = scales::spacing(raw)
        .map(str::to_string)
        .or_else(|| value::parse_arbitrary(raw).map(str::to_string))?;
    // The sign is meaningless on zero and invalid on auto.
    let css_value = if negative && resolved != "0px" && resolved != "auto" {
        format!("-{}", resolved)
    } else {
        resolved
    };
    let declarations = match direction {
        None => format!("{}: {}", property, css_value),
        Some('x') => format!(
            "{p}-left: {v}; {p}-right: {v}",
            p = property,
            v = css_value
        ),
        Some('y') => format!(
            "{p}-top: {v}; {p}-bottom: {v}",
            p = property,
            v = css_value
        ),
        Some('t') => format!("{}-top: {}", property, css_value),
        Some('r') => format!("{}-right: {}", property, css_value),
        Some('b') => format!("{}-bottom: {}", property, css_value),
        Some('l') => format!("{}-left: {}", property, css_value),
        Some(_) => return None,
    };
    Some(declarations)
}

// --- Sizing: w|h-{scale|auto|full|screen|N/M|[arbitrary]} ---

fn match_sizing(token: &str) -> Option<String> {
    let (axis, raw) = token.split_once('-')?;
    let property = match axis {
        "w" => "width",
        "h" => "height",
        _ => return None,
    };
    let css_value = sizing_value(axis, raw)?;
    Some(format!("{}: {}", property, css_value))
}

fn sizing_value(axis: &str, raw: &str) -> Option<String> {
    match raw {
        "auto" => return Some("auto".to_string()),
        "full" => return Some("100%".to_string()),
        "screen" => {
            return Some(if axis == "w" { "100vw" } else { "100vh" }.to_string());
        }
        _ => {}
    }
    if let Some(length) = scales::spacing(raw) {
        return Some(length.to_string());
    }
    if let Some((n, d)) = value::parse_fraction(raw) {
        return Some(format!("{:.6}%", n as f64 / d as f64 * 100.0));
    }
    value::parse_arbitrary(raw).map(str::to_string)
}

// --- Max width: max-w-{scale} ---

fn match_max_width(token: &str) -> Option<String> {
    let keyword = token.strip_prefix("max-w-")?;
    let css_value = scales::max_width(keyword)?;
    Some(format!("max-width: {}", css_value))
}

// --- Border radius: rounded[-{size}][-{corner}] ---

fn match_radius(token: &str) -> Option<String> {
    let rest = token.strip_prefix("rounded")?;
    let (size, corner) = if rest.is_empty() {
        ("DEFAULT", None)
    } else {
        let rest = rest.strip_prefix('-')?;
        match rest.split_once('-') {
            Some((size, corner)) if scales::is_radius_corner(corner) => (size, Some(corner)),
            None if scales::is_radius_corner(rest) => ("DEFAULT", Some(rest)),
            _ => (rest, None),
        }
    };
    let radius = scales::radius(size)?;
    let declarations = match corner {
        None => format!("border-radius: {}", radius),
        Some(corner) => scales::radius_corner_sides(corner)
            .iter()
            .map(|side| format!("border-{}-radius: {}", side, radius))
            .collect::<Vec<_>>()
            .join("; "),
    };
    Some(declarations)
}

// --- Static table ---

fn match_static(token: &str) -> Option<String> {
    scales::static_rule(token).map(str::to_string)
}
