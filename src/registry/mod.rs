//! The country registry: in-memory collection, validation, sorted views
//!
//! The registry is the exclusive owner of the collection. Every mutation
//! goes through add/update/delete, which build the candidate collection,
//! write it to the store, and only then commit it in memory. The in-memory
//! state is therefore never ahead of storage: a failed write surfaces as
//! `RegistryError::Persistence` and leaves the registry unchanged.

use crate::models::{CountryRecord, SortMode};
use crate::store::{Store, COUNTRIES_KEY};
use crate::validation::NamePolicy;

/// Registry operation error
///
/// All variants are recoverable at the call site: the operation leaves the
/// registry unchanged and the caller surfaces the message to the user.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Invalid country name: {0:?}")]
    InvalidNameFormat(String),

    #[error("Country '{0}' is already registered")]
    DuplicateName(String),

    #[error("Country '{0}' is not registered")]
    NotFound(String),

    #[error("Failed to persist registry")]
    Persistence(#[source] anyhow::Error),
}

/// The medal registry
pub struct Registry {
    store: Store,
    policy: NamePolicy,
    countries: Vec<CountryRecord>,
    sort_mode: SortMode,
}

impl Registry {
    /// Load the registry from the store
    pub fn load(store: Store, policy: NamePolicy) -> Result<Self, RegistryError> {
        let countries = store.load(COUNTRIES_KEY).map_err(RegistryError::Persistence)?;
        Ok(Self {
            store,
            policy,
            countries,
            sort_mode: SortMode::default(),
        })
    }

    /// Register a new country
    ///
    /// Validation order: name format first, then uniqueness. On success the
    /// record is appended, preserving insertion order.
    pub fn add(
        &mut self,
        name: &str,
        gold: u32,
        silver: u32,
        bronze: u32,
    ) -> Result<(), RegistryError> {
        if !self.policy.allows(name) {
            return Err(RegistryError::InvalidNameFormat(name.to_string()));
        }
        if self.countries.iter().any(|c| c.name == name) {
            return Err(RegistryError::DuplicateName(name.to_string()));
        }

        let mut candidate = self.countries.clone();
        candidate.push(CountryRecord::new(name, gold, silver, bronze));
        self.commit(candidate)
    }

    /// Replace the medal counts of an existing country
    ///
    /// Direct lookup-then-replace: an absent name reports `NotFound` before
    /// anything is touched, so a miss performs no mutation and no write.
    /// The name itself is immutable; there is no rename operation.
    pub fn update(
        &mut self,
        name: &str,
        gold: u32,
        silver: u32,
        bronze: u32,
    ) -> Result<(), RegistryError> {
        let pos = self
            .countries
            .iter()
            .position(|c| c.name == name)
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))?;

        let mut candidate = self.countries.clone();
        candidate[pos] = CountryRecord::new(name, gold, silver, bronze);
        self.commit(candidate)
    }

    /// Remove a country by name
    ///
    /// Deleting an absent name is a silent no-op; the resulting collection
    /// is persisted unconditionally either way.
    pub fn delete(&mut self, name: &str) -> Result<(), RegistryError> {
        let candidate: Vec<_> = self
            .countries
            .iter()
            .filter(|c| c.name != name)
            .cloned()
            .collect();
        self.commit(candidate)
    }

    /// Derive a sorted view of the registry under the given mode
    ///
    /// Operates on a copy; the stored insertion order is never reordered.
    /// Both comparators are stable, so ties retain their relative order.
    pub fn sorted_view(&self, mode: SortMode) -> Vec<CountryRecord> {
        let mut view = self.countries.clone();
        match mode {
            SortMode::Total => view.sort_by(|a, b| b.total().cmp(&a.total())),
            SortMode::Hierarchy => view.sort_by(|a, b| {
                (b.gold, b.silver, b.bronze).cmp(&(a.gold, a.silver, a.bronze))
            }),
        }
        view
    }

    /// Derived view under the currently active sort mode
    pub fn view(&self) -> Vec<CountryRecord> {
        self.sorted_view(self.sort_mode)
    }

    /// Flip the active sort mode and return the new one
    pub fn toggle_sort_mode(&mut self) -> SortMode {
        self.sort_mode = self.sort_mode.toggle();
        self.sort_mode
    }

    /// The currently active sort mode
    pub fn sort_mode(&self) -> SortMode {
        self.sort_mode
    }

    /// Look up a single record by exact name
    pub fn get(&self, name: &str) -> Option<&CountryRecord> {
        self.countries.iter().find(|c| c.name == name)
    }

    /// Records in insertion order
    pub fn records(&self) -> &[CountryRecord] {
        &self.countries
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// Persist the candidate collection, then commit it in memory
    fn commit(&mut self, candidate: Vec<CountryRecord>) -> Result<(), RegistryError> {
        self.store
            .save(COUNTRIES_KEY, &candidate)
            .map_err(RegistryError::Persistence)?;
        self.countries = candidate;
        Ok(())
    }
}
