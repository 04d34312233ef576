//! Class-set compilation: resolve an ordered token set, group by media
//! query, and serialize to CSS — plus the fixed critical stylesheet and
//! the serializable build manifest.

pub mod compile;
pub mod critical;
pub mod manifest;

pub use compile::{compile, compile_tokens};
pub use critical::critical_css;
pub use manifest::{ManifestError, StyleManifest};
