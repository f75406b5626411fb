//! End-to-end assessment facade.
//!
//! Wires the resolver cascade, the eligibility rules, and the guidance
//! generator behind one entry point so callers hold a single value
//! instead of threading stores and tables through every call.

use chrono::{NaiveDate, Utc};
use tracing::debug;

use crate::core::{Confidence, EngineError, EligibilityVerdict, VehicleIdentity};
use crate::data;
use crate::eligibility::infer_eligibility;
use crate::guidance::{self, Guidance};
use crate::resolver::{ExtractionTables, Resolver};
use crate::store::{RuleSet, RuleSource, StaticReference, VehicleReference};
use crate::vin::WmiEntry;

use std::collections::BTreeMap;

/// Everything one query produces: who the vehicle is, where it may go,
/// and what to ask for next when the answer is neither.
#[derive(Debug, Clone)]
pub struct Assessment {
    pub identity: VehicleIdentity,
    /// Per-country verdicts, keyed by ISO 3166-1 alpha-2 code. Empty
    /// when the identity carries no year evidence at all.
    pub verdicts: BTreeMap<String, EligibilityVerdict>,
    /// Present only for low-confidence identities without year
    /// evidence, where a verdict would be guesswork.
    pub guidance: Option<Guidance>,
}

/// Resolution and eligibility over injected stores.
pub struct Engine<R: VehicleReference, S: RuleSource> {
    reference: R,
    rules: S,
    tables: ExtractionTables,
    wmi: &'static [WmiEntry],
    as_of: NaiveDate,
}

impl Engine<StaticReference, RuleSet> {
    /// Engine over the built-in catalog, WMI table, and country rules,
    /// evaluated as of today.
    pub fn builtin() -> Self {
        Engine::new(
            data::builtin_reference(),
            data::builtin_rules(),
            data::builtin_tables(),
            data::WMI_TABLE,
        )
    }
}

impl<R: VehicleReference, S: RuleSource> Engine<R, S> {
    pub fn new(
        reference: R,
        rules: S,
        tables: ExtractionTables,
        wmi: &'static [WmiEntry],
    ) -> Self {
        Self {
            reference,
            rules,
            tables,
            wmi,
            as_of: Utc::now().date_naive(),
        }
    }

    /// Pin the evaluation date. Age math and "current year" VIN cycle
    /// capping both key off this date.
    pub fn as_of(mut self, date: NaiveDate) -> Self {
        self.as_of = date;
        self
    }

    /// Resolve an identifier to an identity without assessing
    /// eligibility.
    pub fn resolve_identity(&self, input: &str) -> Result<VehicleIdentity, EngineError> {
        let resolver = Resolver::new(&self.reference, &self.tables, self.wmi, self.as_of);
        let resolution = resolver.resolve(input)?;
        Ok(resolution.into_identity())
    }

    /// Assess an already-resolved identity against the given
    /// destination countries (empty slice means every registered
    /// country).
    pub fn infer_eligibility(
        &self,
        identity: &VehicleIdentity,
        countries: &[&str],
    ) -> Result<BTreeMap<String, EligibilityVerdict>, EngineError> {
        infer_eligibility(identity, &self.rules, countries, self.as_of)
    }

    /// Resolve an identifier and assess it in one pass.
    ///
    /// Identities that end up low confidence with no year evidence get
    /// guidance instead of verdicts; everything else gets a verdict per
    /// requested country, however weak the year evidence is, with the
    /// uncertainty carried in the identity's confidence and flags.
    pub fn resolve_and_infer(
        &self,
        input: &str,
        countries: &[&str],
    ) -> Result<Assessment, EngineError> {
        let identity = self.resolve_identity(input)?;
        debug!(
            confidence = ?identity.confidence,
            source = ?identity.source,
            "identity resolved"
        );

        if identity.confidence == Confidence::Low && !identity.has_year_evidence() {
            let guidance = guidance::generate(&identity);
            return Ok(Assessment {
                identity,
                verdicts: BTreeMap::new(),
                guidance: Some(guidance),
            });
        }

        let verdicts = self.infer_eligibility(&identity, countries)?;
        Ok(Assessment {
            identity,
            verdicts,
            guidance: None,
        })
    }
}
