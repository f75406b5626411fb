//! Cascading identifier resolution.
//!
//! Five ordered stages, each tried at most once, stopping at the first
//! that produces an acceptable result: VIN decode, exact match, alias
//! normalization, partial extraction, guided assistance. The cascade
//! never fails on input content — the worst outcome is an
//! [`Resolution::Unresolved`], which callers turn into guidance.

mod extract;
mod fuzzy;
mod normalize;

pub use extract::{
    CHASSIS_ALIAS_WEIGHT, CHASSIS_DIRECT_WEIGHT, ChassisAlias, ChassisEntry, EXTRACTION_FLOOR,
    Extraction, ExtractionTables, MAKE_WEIGHT, MEDIUM_THRESHOLD, MODEL_WEIGHT, MakeEntry,
    ModelEntry, YEAR_WEIGHT, extract,
};
pub use fuzzy::{best_match, similarity};
pub use normalize::normalize_key;

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::core::{
    Confidence, QualityFlag, ResolutionSource, StoreError, VehicleIdentity, VehicleRecord,
    YearRange,
};
use crate::store::VehicleReference;
use crate::vin::{VIN_LENGTH, VinDecode, VinDecoder, WmiEntry};

/// Outcome of the cascade, one variant per stage.
///
/// A closed set rather than a chain of nullable returns: each stage's
/// available fields are statically known, and the confidence rules live
/// in one place ([`Resolution::into_identity`]).
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    VinDecoded(VinDecode),
    ExactMatch {
        record: VehicleRecord,
        range: Option<YearRange>,
    },
    AliasNormalized {
        record: VehicleRecord,
        range: Option<YearRange>,
    },
    PartiallyExtracted {
        extraction: Extraction,
        range: Option<YearRange>,
    },
    Unresolved,
}

impl Resolution {
    /// Flatten into the canonical identity, applying the stage confidence
    /// ceilings and the field-presence invariant (no year evidence means
    /// the result is low confidence, whatever the stage).
    pub fn into_identity(self) -> VehicleIdentity {
        let mut identity = VehicleIdentity::unresolved();
        match self {
            Resolution::VinDecoded(decode) => {
                identity.source = ResolutionSource::VinDecode;
                identity.confidence = match (&decode.make, decode.year) {
                    (Some(_), Some(_)) => Confidence::High,
                    (Some(_), None) | (None, Some(_)) => Confidence::Medium,
                    (None, None) => Confidence::Low,
                };
                if !decode.check_digit_ok {
                    identity.flags.push(QualityFlag::CheckDigitMismatch);
                }
                if decode.ambiguous_cycle {
                    identity.flags.push(QualityFlag::AmbiguousYearCycle);
                }
                if decode.make.is_none() {
                    identity.flags.push(QualityFlag::UnknownManufacturerCode);
                }
                identity.make = decode.make;
                identity.year = decode.year;
                if decode.year_candidates.len() > 1 {
                    identity.year_candidates = decode.year_candidates;
                }
            }
            Resolution::ExactMatch { record, range } => {
                identity.source = ResolutionSource::ExactMatch;
                identity.confidence = Confidence::High;
                identity.make = Some(record.make);
                identity.model = Some(record.model);
                identity.chassis_code = record.chassis_code;
                identity.year_range = range;
            }
            Resolution::AliasNormalized { record, range } => {
                identity.source = ResolutionSource::AliasNormalization;
                identity.confidence = Confidence::Medium;
                identity.make = Some(record.make);
                identity.model = Some(record.model);
                identity.chassis_code = record.chassis_code;
                identity.year_range = range;
            }
            Resolution::PartiallyExtracted { extraction, range } => {
                identity.source = ResolutionSource::PartialExtraction;
                identity.confidence = if extraction.score > MEDIUM_THRESHOLD {
                    Confidence::Medium
                } else {
                    Confidence::Low
                };
                identity.make = extraction.make;
                identity.model = extraction.model;
                identity.chassis_code = extraction.chassis_code;
                identity.year = extraction.year;
                identity.year_range = range;
            }
            Resolution::Unresolved => {}
        }

        // Field-presence invariant: without a year or a production span the
        // identity cannot be more than low confidence.
        if !identity.has_year_evidence() && identity.confidence > Confidence::Low {
            if identity.make.is_some()
                && identity.model.is_some()
                && !identity.flags.contains(&QualityFlag::MissingProductionHistory)
            {
                identity.flags.push(QualityFlag::MissingProductionHistory);
            }
            identity.confidence = Confidence::Low;
        }
        identity
    }
}

/// Runs the cascade against injected reference data.
pub struct Resolver<'a, R: VehicleReference> {
    reference: &'a R,
    tables: &'a ExtractionTables,
    wmi: &'static [WmiEntry],
    as_of: NaiveDate,
}

impl<'a, R: VehicleReference> Resolver<'a, R> {
    pub fn new(
        reference: &'a R,
        tables: &'a ExtractionTables,
        wmi: &'static [WmiEntry],
        as_of: NaiveDate,
    ) -> Self {
        Self {
            reference,
            tables,
            wmi,
            as_of,
        }
    }

    /// Run the cascade. `Err` only on store failure; input content alone
    /// can at worst produce [`Resolution::Unresolved`].
    pub fn resolve(&self, raw: &str) -> Result<Resolution, StoreError> {
        let trimmed = raw.trim();

        // Stage 1 — VIN decode, only attempted at exactly 17 characters.
        if trimmed.chars().count() == VIN_LENGTH
            && let Some(decode) = VinDecoder::new(self.wmi, self.as_of.year()).decode(trimmed)
        {
            debug!(vin = %decode.vin, year = ?decode.year, "resolved via VIN decode");
            return Ok(Resolution::VinDecoded(decode));
        }

        let key = normalize_key(raw);
        if key.is_empty() {
            return Ok(Resolution::Unresolved);
        }

        // Stage 2 — exact match against the reference store.
        if let Some(record) = self.reference.lookup_exact(&key)? {
            let range = self.production_range(&record)?;
            debug!(make = %record.make, model = %record.model, "resolved via exact match");
            return Ok(Resolution::ExactMatch { record, range });
        }

        // Stage 3 — alias normalization.
        if let Some(record) = self.reference.lookup_alias(&key)? {
            let range = self.production_range(&record)?;
            debug!(make = %record.make, model = %record.model, "resolved via alias");
            return Ok(Resolution::AliasNormalized { record, range });
        }

        // Stage 4 — partial extraction.
        let extraction = extract(raw, self.tables, self.as_of.year());
        if extraction.score > EXTRACTION_FLOOR {
            let range = match (&extraction.make, &extraction.model, extraction.year) {
                (Some(make), Some(model), None) => {
                    self.reference.lookup_production_history(make, model)?
                }
                _ => None,
            };
            debug!(score = extraction.score, "resolved via partial extraction");
            return Ok(Resolution::PartiallyExtracted { extraction, range });
        }

        // Stage 5 — nothing held; the caller generates guidance.
        debug!(input = %key, "unresolved, falling back to guidance");
        Ok(Resolution::Unresolved)
    }

    fn production_range(&self, record: &VehicleRecord) -> Result<Option<YearRange>, StoreError> {
        self.reference
            .lookup_production_history(&record.make, &record.model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StaticReference;

    static TEST_WMI: &[WmiEntry] = &[WmiEntry {
        code: "JN1",
        make: "Nissan",
        country: "Japan",
    }];

    fn reference() -> StaticReference {
        let mut store = StaticReference::new();
        let gtr = VehicleRecord::new("Nissan", "Skyline GT-R").with_chassis("BNR32");
        store.insert_exact("Nissan Skyline GT-R", gtr.clone());
        store.insert_alias("r32", gtr.clone());
        store.insert_production("Nissan", "Skyline GT-R", YearRange::new(1989, 2002));
        store.insert_exact("Nissan Stagea", VehicleRecord::new("Nissan", "Stagea"));
        store
    }

    fn tables() -> ExtractionTables {
        ExtractionTables {
            makes: vec![MakeEntry {
                name: "Nissan".into(),
                aliases: vec![],
                models: vec![ModelEntry {
                    name: "Skyline GT-R".into(),
                    aliases: vec!["skyline".into()],
                }],
            }],
            chassis: vec![ChassisEntry {
                code: "BNR32".into(),
                make: "Nissan".into(),
                model: "Skyline GT-R".into(),
            }],
            chassis_aliases: vec![],
        }
    }

    fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 6, 1).unwrap()
    }

    fn resolve(input: &str) -> VehicleIdentity {
        let reference = reference();
        let tables = tables();
        Resolver::new(&reference, &tables, TEST_WMI, as_of())
            .resolve(input)
            .unwrap()
            .into_identity()
    }

    #[test]
    fn vin_stage_wins_for_17_char_vins() {
        let identity = resolve("JN1CV6AP4FM123456");
        assert_eq!(identity.source, ResolutionSource::VinDecode);
        assert_eq!(identity.confidence, Confidence::High);
        assert_eq!(identity.make.as_deref(), Some("Nissan"));
        assert_eq!(identity.year, Some(2015));
        assert!(identity.flags.contains(&QualityFlag::CheckDigitMismatch));
    }

    #[test]
    fn exact_match_attaches_production_range() {
        let identity = resolve("nissan skyline gt-r");
        assert_eq!(identity.source, ResolutionSource::ExactMatch);
        assert_eq!(identity.confidence, Confidence::High);
        assert_eq!(identity.year_range, Some(YearRange::new(1989, 2002)));
        assert_eq!(identity.chassis_code.as_deref(), Some("BNR32"));
    }

    #[test]
    fn alias_stage_is_medium() {
        let identity = resolve("R32");
        assert_eq!(identity.source, ResolutionSource::AliasNormalization);
        assert_eq!(identity.confidence, Confidence::Medium);
        assert_eq!(identity.make.as_deref(), Some("Nissan"));
        assert!(identity.year_range.is_some());
    }

    #[test]
    fn exact_match_without_history_demotes_to_low() {
        let identity = resolve("nissan stagea");
        assert_eq!(identity.source, ResolutionSource::ExactMatch);
        assert_eq!(identity.confidence, Confidence::Low);
        assert!(identity.flags.contains(&QualityFlag::MissingProductionHistory));
    }

    #[test]
    fn partial_extraction_with_year() {
        let identity = resolve("1995 nissan skyline for export");
        assert_eq!(identity.source, ResolutionSource::PartialExtraction);
        assert_eq!(identity.year, Some(1995));
        // 0.3 + 0.2 + 0.3 = 0.8, not above the medium threshold — rounds down
        assert_eq!(identity.confidence, Confidence::Low);
    }

    #[test]
    fn unresolved_input_is_empty_low_identity() {
        let identity = resolve("blue car");
        assert_eq!(identity.source, ResolutionSource::None);
        assert_eq!(identity.confidence, Confidence::Low);
        assert!(identity.make.is_none());
        assert!(identity.model.is_none());
        assert!(identity.year.is_none());
        assert!(identity.year_range.is_none());
    }

    #[test]
    fn empty_and_whitespace_inputs_resolve() {
        assert_eq!(resolve("").source, ResolutionSource::None);
        assert_eq!(resolve("   \t ").source, ResolutionSource::None);
    }

    #[test]
    fn seventeen_char_phrase_falls_through_vin_stage() {
        // 17 characters, but spaces are not VIN alphabet.
        let input = "nissan skyline gt";
        assert_eq!(input.chars().count(), 17);
        let identity = resolve(input);
        assert_ne!(identity.source, ResolutionSource::VinDecode);
    }
}
