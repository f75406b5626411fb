//! Built-in per-country import rules.
//!
//! Minimum ages and calculation bases follow the published regimes of
//! the destination countries the platform serves. Exemptions are
//! advisory text only — the engine surfaces them, it never applies them.

use crate::core::{CalculationMethod, EligibilityRule};
use crate::store::RuleSet;

/// Rule table for the built-in destination countries
/// (US, CA, GB, AU, NZ, DE).
pub fn builtin_rules() -> RuleSet {
    let mut rules = RuleSet::new();
    rules.insert(
        "US",
        EligibilityRule::new(
            "49 U.S.C. § 30112 — the NHTSA 25-year exemption",
            25,
            CalculationMethod::ProductionYear,
        )
        .with_exemption("Show or Display approval (49 CFR 591.5(j))")
        .with_exemption("Vehicles originally certified to FMVSS"),
    );
    rules.insert(
        "CA",
        EligibilityRule::new(
            "Motor Vehicle Safety Act — Transport Canada 15-year exemption",
            15,
            CalculationMethod::ProductionYear,
        )
        .with_exemption("US-market vehicles via the RIV program"),
    );
    rules.insert(
        "GB",
        EligibilityRule::new(
            "DVLA registration via Individual Vehicle Approval — no minimum age",
            0,
            CalculationMethod::FirstRegistration,
        )
        .with_exemption("Mutual recognition of existing type approval"),
    );
    rules.insert(
        "AU",
        EligibilityRule::new(
            "Road Vehicle Standards Act 2018 — 25-year concessional RAV entry",
            25,
            CalculationMethod::ProductionYear,
        )
        .with_exemption("SEVS (Specialist and Enthusiast Vehicle Scheme)")
        .with_exemption("RAWS workshop compliance"),
    );
    rules.insert(
        "NZ",
        EligibilityRule::new(
            "Land Transport Rule: Frontal Impact 2001 — 20-year special interest vehicle",
            20,
            CalculationMethod::FirstRegistration,
        )
        .with_exemption("Special interest vehicle permit"),
    );
    rules.insert(
        "DE",
        EligibilityRule::new(
            "§ 23 StVZO — H-Kennzeichen historic registration at 30 years",
            30,
            CalculationMethod::FirstRegistration,
        )
        .with_exemption("FIVA identity card holders"),
    );
    rules
}
