//! Immutable lookup data for the utility-class compiler.
//!
//! Everything in this crate is pure data: the color palette, the spacing
//! and font-size scales, border-radius and max-width scales, the
//! breakpoint table, and the static token → declaration table. All
//! tables are constructed once at process start and never mutated, so
//! every accessor is safe to call concurrently.

pub mod breakpoints;
pub mod palette;
pub mod radius;
pub mod spacing;
pub mod statics;
pub mod typography;

pub use breakpoints::{BREAKPOINTS, breakpoint};
pub use palette::{color_hex, default_shade};
pub use radius::{is_radius_corner, radius, radius_corner_sides};
pub use spacing::spacing;
pub use statics::{is_text_align_keyword, max_width, static_rule};
pub use typography::{font_size, is_font_size_keyword};
