//! # siftcss
//!
//! A deterministic utility-class style compiler: short grammar-
//! constrained class tokens (`bg-blue-500/50`, `md:hover:gap-x-2`,
//! `-mt-4`, `w-[200px]`) in, concrete CSS rules out — plus a tree
//! walker that collects the tokens a page actually uses, so only the
//! needed CSS is emitted.
//!
//! - **scales**: immutable lookup data (palette, spacing, breakpoints, …)
//! - **resolver**: token → rule, via an ordered matcher chain and the
//!   variant/responsive composers
//! - **compiler**: token set → CSS text, critical CSS, build manifest
//! - **extract**: serialized UI tree → distinct class token set
//!
//! ## Design principle
//!
//! The core is permissive: resolution has exactly one failure mode
//! ("no match"), expressed as `Option`, and the compiler silently skips
//! tokens it cannot resolve. Nothing in the resolve/compile/extract
//! path does I/O, blocks, or mutates shared state, so every entry
//! point is safe to call concurrently.

// Re-export foundation crates
pub use siftcss_compiler as compiler;
pub use siftcss_extract as extract;
pub use siftcss_resolver as resolver;
pub use siftcss_scales as scales;

// Re-export commonly used items
pub use compiler::{ManifestError, StyleManifest, compile, compile_tokens, critical_css};
pub use extract::{NodeProps, TreeChild, TreeNode, extract_classes};
pub use resolver::{StyleRule, class_selector, escape_class, resolve};

use thiserror::Error;

/// Errors from the outer pipeline surface (tree parsing, manifest
/// persistence, CLI I/O). The core itself never fails.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("tree parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("manifest error: {0}")]
    Manifest(#[from] ManifestError),
}

/// Compiles the stylesheet for exactly the class tokens a tree uses.
/// Critical CSS is not included; callers prepend [`critical_css`]
/// themselves.
pub fn stylesheet_for(tree: &TreeNode) -> String {
    let tokens = extract_classes(tree);
    log::debug!("compiling {} tokens from tree", tokens.len());
    compile(&tokens)
}

/// Builds a [`StyleManifest`] for a tree under the given version.
pub fn manifest_for(version: &str, tree: &TreeNode) -> StyleManifest {
    StyleManifest::build(version, &extract_classes(tree))
}

/// Parses a serialized UI tree from JSON.
pub fn parse_tree(json: &str) -> Result<TreeNode, PipelineError> {
    Ok(serde_json::from_str(json)?)
}
