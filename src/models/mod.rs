//! Data models for the medal registry
//!
//! These represent the canonical JSON structure stored in the collection store

use serde::{Deserialize, Serialize};

/// One country's entry in the medal registry
///
/// The name is the record's identity key: unique within the registry
/// (case-sensitive exact match) and immutable once set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CountryRecord {
    pub name: String,
    pub gold: u32,
    pub silver: u32,
    pub bronze: u32,
}

impl CountryRecord {
    pub fn new(name: impl Into<String>, gold: u32, silver: u32, bronze: u32) -> Self {
        Self {
            name: name.into(),
            gold,
            silver,
            bronze,
        }
    }

    /// Combined medal count, used by the total sort mode
    pub fn total(&self) -> u32 {
        self.gold + self.silver + self.bronze
    }
}

/// Active comparator for the standings view
///
/// Transient UI-facing state: it is never persisted and only consumed
/// when a sorted view is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Descending by gold, ties by silver, then bronze
    #[default]
    Hierarchy,
    /// Descending by gold + silver + bronze
    Total,
}

impl SortMode {
    /// Flip between the two modes (the sort checkbox toggle)
    pub fn toggle(self) -> Self {
        match self {
            SortMode::Hierarchy => SortMode::Total,
            SortMode::Total => SortMode::Hierarchy,
        }
    }
}

impl std::fmt::Display for SortMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortMode::Hierarchy => write!(f, "hierarchy"),
            SortMode::Total => write!(f, "total"),
        }
    }
}

impl std::str::FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hierarchy" => Ok(SortMode::Hierarchy),
            "total" => Ok(SortMode::Total),
            _ => Err(format!("Invalid sort mode: {}. Use: hierarchy, total", s)),
        }
    }
}

/// Normalize a raw medal-count field from the form boundary
///
/// The presentation layer hands over numeric strings; anything non-numeric
/// or negative is rejected here, before it reaches the registry.
pub fn parse_medal_count(raw: &str) -> Result<u32, String> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| format!("Invalid medal count: {:?}. Use a non-negative integer", raw))
}
