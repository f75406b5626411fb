use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Closed three-level confidence tier.
///
/// Ordered so that `Low < Medium < High`. Ties and near-ties in scoring
/// always round *down* — a result is never more confident than the weakest
/// evidence that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

/// Which resolution stage produced an identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionSource {
    VinDecode,
    ExactMatch,
    AliasNormalization,
    PartialExtraction,
    None,
}

/// Inclusive production-year span for a make/model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    pub start: i32,
    pub end: i32,
}

impl YearRange {
    pub fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    /// Whether `year` falls inside the span.
    pub fn contains(&self, year: i32) -> bool {
        (self.start..=self.end).contains(&year)
    }
}

/// Non-fatal data-quality observations attached to an identity.
///
/// None of these reject a result; they record why the result is weaker
/// than it could be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityFlag {
    /// The VIN's 9th character did not match the computed check value.
    /// Manufacturers vary in conformance, so decoding proceeds anyway.
    CheckDigitMismatch,
    /// The VIN year letter matched more than one 30-year encoding cycle
    /// and the position-7 heuristic could not settle it.
    AmbiguousYearCycle,
    /// The 3-character WMI prefix is not in the manufacturer table.
    UnknownManufacturerCode,
    /// A known make/model matched but no production-year span is on record.
    MissingProductionHistory,
}

/// The canonical output of identifier resolution.
///
/// Field presence tracks confidence: a `High` identity always carries a
/// make, and an identity with neither `year` nor `year_range` is only
/// ever `Low`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleIdentity {
    /// Canonical manufacturer name (e.g. "Nissan").
    pub make: Option<String>,
    /// Canonical model name (e.g. "Skyline GT-R").
    pub model: Option<String>,
    /// Single model year, when decoded or extracted.
    pub year: Option<i32>,
    /// Production span, when a single year could not be determined.
    pub year_range: Option<YearRange>,
    /// Manufacturer-internal platform code (e.g. "BNR32"), when extracted.
    pub chassis_code: Option<String>,
    /// Alternative model years when the VIN year letter was cycle-ambiguous.
    /// Contains every candidate (including the chosen `year`), oldest first.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub year_candidates: Vec<i32>,
    /// How sure the resolver is about this identity.
    pub confidence: Confidence,
    /// Which cascade stage produced it.
    pub source: ResolutionSource,
    /// Data-quality observations recorded along the way.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub flags: Vec<QualityFlag>,
}

impl VehicleIdentity {
    /// An empty, lowest-confidence identity (the guided-assistance outcome).
    pub fn unresolved() -> Self {
        Self {
            make: None,
            model: None,
            year: None,
            year_range: None,
            chassis_code: None,
            year_candidates: Vec::new(),
            confidence: Confidence::Low,
            source: ResolutionSource::None,
            flags: Vec::new(),
        }
    }

    /// Whether any year evidence (single year or range) is attached.
    pub fn has_year_evidence(&self) -> bool {
        self.year.is_some() || self.year_range.is_some()
    }

    /// Human-readable description used in verdict explanations,
    /// e.g. "1995 Nissan Skyline GT-R" or "this vehicle".
    pub fn describe(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if let Some(year) = self.year {
            parts.push(year.to_string());
        }
        if let Some(make) = &self.make {
            parts.push(make.clone());
        }
        if let Some(model) = &self.model {
            parts.push(model.clone());
        }
        if parts.is_empty() {
            "this vehicle".to_string()
        } else {
            parts.join(" ")
        }
    }
}

/// A canonical vehicle record returned by the reference store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleRecord {
    pub make: String,
    pub model: String,
    /// Platform code when the record is generation-specific.
    pub chassis_code: Option<String>,
}

impl VehicleRecord {
    pub fn new(make: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            make: make.into(),
            model: model.into(),
            chassis_code: None,
        }
    }

    pub fn with_chassis(mut self, code: impl Into<String>) -> Self {
        self.chassis_code = Some(code.into());
        self
    }
}

/// Basis a country uses to count vehicle age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculationMethod {
    ProductionYear,
    ModelYear,
    FirstRegistration,
}

impl CalculationMethod {
    /// Wording used inside verdict explanations.
    pub fn label(&self) -> &'static str {
        match self {
            Self::ProductionYear => "production year",
            Self::ModelYear => "model year",
            Self::FirstRegistration => "first registration",
        }
    }
}

/// Per-country import rule, immutable reference data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityRule {
    /// Human-readable citation of the governing rule.
    pub citation: String,
    /// Minimum vehicle age in years.
    pub minimum_age: u32,
    /// Which year the age is counted from.
    pub calculation_method: CalculationMethod,
    /// Named exemptions, advisory only — surfaced as text, never applied.
    pub exemptions: Vec<String>,
}

impl EligibilityRule {
    pub fn new(
        citation: impl Into<String>,
        minimum_age: u32,
        calculation_method: CalculationMethod,
    ) -> Self {
        Self {
            citation: citation.into(),
            minimum_age,
            calculation_method,
            exemptions: Vec::new(),
        }
    }

    pub fn with_exemption(mut self, exemption: impl Into<String>) -> Self {
        self.exemptions.push(exemption.into());
        self
    }
}

/// Per-country eligibility determination.
///
/// `eligible == true` implies `next_eligible_date` is absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityVerdict {
    pub eligible: bool,
    /// Citation of the governing rule.
    pub rule: String,
    /// Fully formed sentence referencing the resolved vehicle.
    pub explanation: String,
    /// Earliest qualifying model year, when the vehicle is not yet eligible
    /// or when eligibility is range-based.
    pub earliest_eligible_year: Option<i32>,
    /// First calendar date the vehicle becomes eligible, when it is not yet.
    pub next_eligible_date: Option<NaiveDate>,
    /// Advisory exemptions named by the rule, if any.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exemptions: Vec<String>,
}
