//! Name validation for registry entries
//!
//! The allowed-characters rule changed across revisions of the app, so the
//! policy is configuration rather than a hardcoded check: a regex loaded
//! from `name_pattern` in config.toml, with the historical Hangul-only
//! restriction available as a preset.

use anyhow::{Context, Result};
use regex::Regex;

/// Names must be a single run of Hangul syllables under the deployed policy.
pub const HANGUL_PATTERN: &str = r"^[\x{AC00}-\x{D7A3}]+$";

/// Default policy: words of alphabetic characters separated by single spaces.
const DEFAULT_PATTERN: &str = r"^\p{Alphabetic}+(?: \p{Alphabetic}+)*$";

/// Pluggable predicate deciding which country names the registry accepts
#[derive(Debug, Clone)]
pub struct NamePolicy {
    pattern: Regex,
}

impl NamePolicy {
    /// Build a policy from a configured regex pattern
    ///
    /// A pattern that fails to compile is a configuration error, surfaced
    /// at load time rather than per registry operation.
    pub fn from_pattern(pattern: &str) -> Result<Self> {
        let pattern = Regex::new(pattern)
            .with_context(|| format!("Invalid name_pattern in config: {:?}", pattern))?;
        Ok(Self { pattern })
    }

    /// The deployed script restriction: Hangul syllables only
    pub fn hangul() -> Self {
        Self {
            pattern: Regex::new(HANGUL_PATTERN).expect("hangul pattern is valid"),
        }
    }

    /// True if the name is non-empty and composed only of allowed characters
    pub fn allows(&self, name: &str) -> bool {
        !name.is_empty() && self.pattern.is_match(name)
    }
}

impl Default for NamePolicy {
    fn default() -> Self {
        Self {
            pattern: Regex::new(DEFAULT_PATTERN).expect("default pattern is valid"),
        }
    }
}

/// Resolve the active policy from an optional configured pattern
pub fn policy_from_config(name_pattern: Option<&str>) -> Result<NamePolicy> {
    match name_pattern {
        Some(pattern) => NamePolicy::from_pattern(pattern),
        None => Ok(NamePolicy::default()),
    }
}
