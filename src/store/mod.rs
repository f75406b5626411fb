//! Reference-store interfaces and in-memory implementations.
//!
//! The persistent vehicle and rule stores live outside this crate; the
//! core consumes them through the two traits here. [`StaticReference`]
//! and [`RuleSet`] are the in-memory implementations used for the
//! built-in dataset and for test fixtures.

use std::collections::BTreeMap;

use crate::core::{EligibilityRule, StoreError, VehicleRecord, YearRange};
use crate::resolver::normalize_key;

/// Exact-match, alias, and production-history lookups against the
/// vehicle reference store. Keys are case-insensitive and
/// whitespace-trimmed; absence is `Ok(None)`, never an error.
pub trait VehicleReference {
    /// Canonical record for a normalized identifier, if registered.
    fn lookup_exact(&self, key: &str) -> Result<Option<VehicleRecord>, StoreError>;

    /// Production-year span for a make/model, if on record.
    fn lookup_production_history(
        &self,
        make: &str,
        model: &str,
    ) -> Result<Option<YearRange>, StoreError>;

    /// Canonical record for a known colloquial variant, if registered.
    fn lookup_alias(&self, input: &str) -> Result<Option<VehicleRecord>, StoreError>;
}

/// Per-country eligibility rule lookups.
///
/// A country with no rule is a configuration error at the engine
/// boundary, not a runtime branch — the trait reports absence and the
/// engine turns it into [`crate::EngineError::MissingRule`].
pub trait RuleSource {
    fn lookup_rule(&self, country: &str) -> Result<Option<EligibilityRule>, StoreError>;

    /// Every registered country code, sorted.
    fn countries(&self) -> Result<Vec<String>, StoreError>;
}

/// In-memory vehicle reference built from injected tables.
#[derive(Debug, Clone, Default)]
pub struct StaticReference {
    exact: BTreeMap<String, VehicleRecord>,
    aliases: BTreeMap<String, VehicleRecord>,
    production: BTreeMap<(String, String), YearRange>,
}

impl StaticReference {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a canonical identifier (e.g. "Nissan Skyline GT-R").
    pub fn insert_exact(&mut self, key: &str, record: VehicleRecord) {
        self.exact.insert(normalize_key(key), record);
    }

    /// Register a colloquial variant (e.g. "r32" or "hakosuka").
    pub fn insert_alias(&mut self, alias: &str, record: VehicleRecord) {
        self.aliases.insert(normalize_key(alias), record);
    }

    /// Register a production span for a make/model.
    pub fn insert_production(&mut self, make: &str, model: &str, range: YearRange) {
        self.production
            .insert((normalize_key(make), normalize_key(model)), range);
    }
}

impl VehicleReference for StaticReference {
    fn lookup_exact(&self, key: &str) -> Result<Option<VehicleRecord>, StoreError> {
        Ok(self.exact.get(&normalize_key(key)).cloned())
    }

    fn lookup_production_history(
        &self,
        make: &str,
        model: &str,
    ) -> Result<Option<YearRange>, StoreError> {
        Ok(self
            .production
            .get(&(normalize_key(make), normalize_key(model)))
            .copied())
    }

    fn lookup_alias(&self, input: &str) -> Result<Option<VehicleRecord>, StoreError> {
        Ok(self.aliases.get(&normalize_key(input)).cloned())
    }
}

/// In-memory per-country rule table.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: BTreeMap<String, EligibilityRule>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a rule under an ISO 3166-1 alpha-2 country code.
    pub fn insert(&mut self, country: &str, rule: EligibilityRule) {
        self.rules.insert(country.trim().to_uppercase(), rule);
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }
}

impl RuleSource for RuleSet {
    fn lookup_rule(&self, country: &str) -> Result<Option<EligibilityRule>, StoreError> {
        Ok(self.rules.get(&country.trim().to_uppercase()).cloned())
    }

    fn countries(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.rules.keys().cloned().collect())
    }
}
