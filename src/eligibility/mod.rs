//! Per-country import-eligibility inference.
//!
//! Verdicts are computed independently per destination country and
//! degrade in specificity with the identity's own evidence: a concrete
//! year gives an exact verdict, a production range is assessed against
//! its earliest qualifying year, and an identity with no year evidence
//! gets a generic cutoff with a conservative `eligible = false`.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::core::{EligibilityRule, EligibilityVerdict, EngineError, VehicleIdentity, YearRange};
use crate::store::RuleSource;

/// One verdict per requested country. An empty `countries` slice means
/// every country registered in the rule source.
///
/// A country without a registered rule is a configuration error
/// ([`EngineError::MissingRule`]), never a silent skip.
pub fn infer_eligibility<S: RuleSource>(
    identity: &VehicleIdentity,
    rules: &S,
    countries: &[&str],
    as_of: NaiveDate,
) -> Result<BTreeMap<String, EligibilityVerdict>, EngineError> {
    let requested: Vec<String> = if countries.is_empty() {
        rules.countries()?
    } else {
        countries.iter().map(|c| c.trim().to_uppercase()).collect()
    };

    let mut verdicts = BTreeMap::new();
    for country in requested {
        let rule = rules
            .lookup_rule(&country)?
            .ok_or_else(|| EngineError::MissingRule(country.clone()))?;
        let verdict = assess(identity, &rule, as_of);
        debug!(%country, eligible = verdict.eligible, "eligibility assessed");
        verdicts.insert(country, verdict);
    }
    Ok(verdicts)
}

/// Assess a single identity against a single country rule.
pub fn assess(
    identity: &VehicleIdentity,
    rule: &EligibilityRule,
    as_of: NaiveDate,
) -> EligibilityVerdict {
    let current_year = as_of.year();
    match (identity.year, identity.year_range) {
        (Some(year), _) => assess_concrete_year(identity, rule, year, current_year),
        (None, Some(range)) => assess_range(identity, rule, range, current_year),
        (None, None) => assess_no_evidence(identity, rule, current_year),
    }
}

fn assess_concrete_year(
    identity: &VehicleIdentity,
    rule: &EligibilityRule,
    year: i32,
    current_year: i32,
) -> EligibilityVerdict {
    let age = current_year - year;
    let minimum = minimum_age_years(rule);
    if age >= minimum {
        EligibilityVerdict {
            eligible: true,
            rule: rule.citation.clone(),
            explanation: format!(
                "A {} is {} years old by {}, meeting the {}-year minimum under {}.",
                identity.describe(),
                age,
                rule.calculation_method.label(),
                minimum,
                rule.citation,
            ),
            earliest_eligible_year: None,
            next_eligible_date: None,
            exemptions: rule.exemptions.clone(),
        }
    } else {
        let earliest = year.saturating_add(minimum);
        EligibilityVerdict {
            eligible: false,
            rule: rule.citation.clone(),
            explanation: format!(
                "A {} is only {} years old; it reaches the {}-year minimum under {} on January 1, {}.",
                identity.describe(),
                age,
                minimum,
                rule.citation,
                earliest,
            ),
            earliest_eligible_year: Some(earliest),
            next_eligible_date: january_first(earliest),
            exemptions: rule.exemptions.clone(),
        }
    }
}

fn assess_range(
    identity: &VehicleIdentity,
    rule: &EligibilityRule,
    range: YearRange,
    current_year: i32,
) -> EligibilityVerdict {
    let minimum = minimum_age_years(rule);
    let cutoff = current_year - minimum;
    if range.start <= cutoff {
        // The span contains qualifying years; cite the most recent
        // production year that still clears the bar.
        let candidate = cutoff.max(range.start).min(range.end);
        EligibilityVerdict {
            eligible: true,
            rule: rule.citation.clone(),
            explanation: format!(
                "{} production ({}\u{2013}{}) includes model years up to {} that meet the {}-year minimum under {}.",
                identity.describe(),
                range.start,
                range.end,
                candidate,
                minimum,
                rule.citation,
            ),
            earliest_eligible_year: Some(candidate),
            next_eligible_date: None,
            exemptions: rule.exemptions.clone(),
        }
    } else {
        let earliest = range.start.saturating_add(minimum);
        EligibilityVerdict {
            eligible: false,
            rule: rule.citation.clone(),
            explanation: format!(
                "The earliest {} production year ({}) reaches the {}-year minimum under {} on January 1, {}.",
                identity.describe(),
                range.start,
                minimum,
                rule.citation,
                earliest,
            ),
            earliest_eligible_year: Some(earliest),
            next_eligible_date: january_first(earliest),
            exemptions: rule.exemptions.clone(),
        }
    }
}

fn assess_no_evidence(
    identity: &VehicleIdentity,
    rule: &EligibilityRule,
    current_year: i32,
) -> EligibilityVerdict {
    let cutoff = current_year - minimum_age_years(rule);
    // Absence of evidence is not proof of eligibility; the conservative
    // default applies.
    EligibilityVerdict {
        eligible: false,
        rule: rule.citation.clone(),
        explanation: format!(
            "No model year is known for {}; under {} it must be from {} or earlier to qualify.",
            identity.describe(),
            rule.citation,
            cutoff,
        ),
        earliest_eligible_year: None,
        next_eligible_date: None,
        exemptions: rule.exemptions.clone(),
    }
}

fn january_first(year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, 1, 1)
}

/// Minimum age in whole years, saturated rather than truncated — a rule
/// with an age past `i32::MAX` must never wrap negative.
fn minimum_age_years(rule: &EligibilityRule) -> i32 {
    i32::try_from(rule.minimum_age).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CalculationMethod;
    use crate::store::RuleSet;

    fn rule_25() -> EligibilityRule {
        EligibilityRule::new("the 25-year rule", 25, CalculationMethod::ProductionYear)
    }

    fn identity_with_year(year: i32) -> VehicleIdentity {
        let mut identity = VehicleIdentity::unresolved();
        identity.make = Some("Nissan".into());
        identity.model = Some("Skyline GT-R".into());
        identity.year = Some(year);
        identity
    }

    fn as_of_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn exact_minimum_age_is_eligible() {
        let verdict = assess(&identity_with_year(1999), &rule_25(), as_of_2024());
        assert!(verdict.eligible);
        assert!(verdict.next_eligible_date.is_none());
        assert!(verdict.earliest_eligible_year.is_none());
    }

    #[test]
    fn one_year_short_is_not_eligible() {
        let verdict = assess(&identity_with_year(2000), &rule_25(), as_of_2024());
        assert!(!verdict.eligible);
        assert_eq!(verdict.earliest_eligible_year, Some(2025));
        assert_eq!(
            verdict.next_eligible_date,
            NaiveDate::from_ymd_opt(2025, 1, 1)
        );
    }

    #[test]
    fn range_spanning_cutoff_is_eligible() {
        // A 1989-2002 span against a 25-year rule in 2024: the cutoff
        // (1999) falls inside the span.
        let mut identity = VehicleIdentity::unresolved();
        identity.make = Some("Nissan".into());
        identity.model = Some("Skyline GT-R".into());
        identity.year_range = Some(YearRange::new(1989, 2002));
        let verdict = assess(&identity, &rule_25(), as_of_2024());
        assert!(verdict.eligible);
        assert_eq!(verdict.earliest_eligible_year, Some(1999));
        assert!(verdict.explanation.contains("1999"));
        assert!(verdict.next_eligible_date.is_none());
    }

    #[test]
    fn range_entirely_too_new() {
        let mut identity = VehicleIdentity::unresolved();
        identity.year_range = Some(YearRange::new(2019, 2023));
        let verdict = assess(&identity, &rule_25(), as_of_2024());
        assert!(!verdict.eligible);
        assert_eq!(verdict.earliest_eligible_year, Some(2044));
        assert_eq!(
            verdict.next_eligible_date,
            NaiveDate::from_ymd_opt(2044, 1, 1)
        );
    }

    #[test]
    fn no_evidence_defaults_to_ineligible_with_cutoff() {
        let verdict = assess(&VehicleIdentity::unresolved(), &rule_25(), as_of_2024());
        assert!(!verdict.eligible);
        assert!(verdict.explanation.contains("1999"));
        assert!(verdict.next_eligible_date.is_none());
    }

    #[test]
    fn absurd_minimum_age_saturates_instead_of_wrapping() {
        let rule = EligibilityRule::new("forever", u32::MAX, CalculationMethod::ProductionYear);
        let verdict = assess(&identity_with_year(1990), &rule, as_of_2024());
        assert!(!verdict.eligible);
        // Saturated projection is far out of chrono's range, so no date.
        assert!(verdict.next_eligible_date.is_none());
    }

    #[test]
    fn zero_minimum_age_always_eligible() {
        let rule = EligibilityRule::new("no minimum age", 0, CalculationMethod::FirstRegistration);
        let verdict = assess(&identity_with_year(2024), &rule, as_of_2024());
        assert!(verdict.eligible);
    }

    #[test]
    fn missing_rule_is_configuration_error() {
        let rules = RuleSet::new();
        let err = infer_eligibility(&identity_with_year(1995), &rules, &["US"], as_of_2024())
            .unwrap_err();
        assert!(matches!(err, EngineError::MissingRule(c) if c == "US"));
    }

    #[test]
    fn empty_country_slice_means_all_registered() {
        let mut rules = RuleSet::new();
        rules.insert("US", rule_25());
        rules.insert(
            "CA",
            EligibilityRule::new("the 15-year rule", 15, CalculationMethod::ProductionYear),
        );
        let verdicts =
            infer_eligibility(&identity_with_year(1995), &rules, &[], as_of_2024()).unwrap();
        assert_eq!(verdicts.len(), 2);
        assert!(verdicts.contains_key("US"));
        assert!(verdicts.contains_key("CA"));
    }

    #[test]
    fn verdicts_are_independent_per_country() {
        let mut rules = RuleSet::new();
        rules.insert("US", rule_25());
        rules.insert(
            "CA",
            EligibilityRule::new("the 15-year rule", 15, CalculationMethod::ProductionYear),
        );
        let verdicts =
            infer_eligibility(&identity_with_year(2005), &rules, &["US", "CA"], as_of_2024())
                .unwrap();
        assert!(!verdicts["US"].eligible);
        assert!(verdicts["CA"].eligible);
    }
}
