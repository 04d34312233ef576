//! The serializable build manifest: every resolved rule for a token
//! set, keyed by token, plus the breakpoint table and the critical
//! stylesheet. Built once per compilation pass and immutable afterward;
//! persistence (if any) is the caller's job.

use crate::critical::critical_css;
use chrono::{DateTime, Utc};
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use siftcss_resolver::{StyleRule, resolve};
use siftcss_scales::BREAKPOINTS;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct StyleManifest {
    /// Caller-supplied build/version identifier.
    pub version: String,
    pub generated_at: DateTime<Utc>,
    /// Token → resolved rules, in token insertion order. Tokens with no
    /// matching rule are absent.
    pub rules: IndexMap<String, Vec<StyleRule>>,
    /// Breakpoint name → media query, smallest-first.
    pub variants: IndexMap<String, String>,
    pub critical: String,
}

impl StyleManifest {
    /// Builds a manifest for a token set under the given version.
    pub fn build(version: impl Into<String>, tokens: &IndexSet<String>) -> Self {
        let mut rules = IndexMap::new();
        for token in tokens {
            if let Some(rule) = resolve(token) {
                rules.insert(token.clone(), vec![rule]);
            }
        }
        log::debug!("manifest holds {} of {} tokens", rules.len(), tokens.len());
        let variants = BREAKPOINTS
            .iter()
            .map(|(name, query)| (name.to_string(), query.to_string()))
            .collect();
        Self {
            version: version.into(),
            generated_at: Utc::now(),
            rules,
            variants,
            critical: critical_css().to_string(),
        }
    }

    pub fn to_json(&self) -> Result<String, ManifestError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, ManifestError> {
        Ok(serde_json::from_str(json)?)
    }
}
