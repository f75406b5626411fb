//! Partial extraction of make/model/year/chassis evidence from free text.
//!
//! Scoring is additive and capped at 1.0 so that independent pieces of
//! evidence accumulate instead of averaging each other down. A
//! chassis-code table hit pins down the model as well, so the model
//! component is awarded together with it.

use tracing::trace;

use super::fuzzy;
use super::normalize::{normalize_key, tokens};

/// Score contribution of a plausible 4-digit year token.
pub const YEAR_WEIGHT: f64 = 0.3;
/// Score contribution of a chassis code found in the canonical table.
pub const CHASSIS_DIRECT_WEIGHT: f64 = 0.4;
/// Score contribution of a chassis code found via the colloquial alias table.
pub const CHASSIS_ALIAS_WEIGHT: f64 = 0.6;
/// Score contribution of a make substring match.
pub const MAKE_WEIGHT: f64 = 0.2;
/// Score contribution of a model substring/alias match within the make's table.
pub const MODEL_WEIGHT: f64 = 0.3;
/// Minimum combined score for extraction to produce an identity.
pub const EXTRACTION_FLOOR: f64 = 0.5;
/// Combined score above which an extracted identity is medium confidence.
pub const MEDIUM_THRESHOLD: f64 = 0.8;

/// Injected lookup tables for partial extraction.
///
/// Substitutable per test fixture; the production dataset lives in
/// [`crate::data`].
#[derive(Debug, Clone, Default)]
pub struct ExtractionTables {
    /// Known makes, in declaration order (order breaks fuzzy ties).
    pub makes: Vec<MakeEntry>,
    /// Canonical chassis codes.
    pub chassis: Vec<ChassisEntry>,
    /// Colloquial chassis shorthand, mapped to canonical codes.
    pub chassis_aliases: Vec<ChassisAlias>,
}

#[derive(Debug, Clone)]
pub struct MakeEntry {
    pub name: String,
    /// Colloquial or abbreviated forms ("vw", "chevy", "mercedes").
    pub aliases: Vec<String>,
    /// Models of this make, in declaration order.
    pub models: Vec<ModelEntry>,
}

#[derive(Debug, Clone)]
pub struct ModelEntry {
    pub name: String,
    pub aliases: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ChassisEntry {
    pub code: String,
    pub make: String,
    pub model: String,
}

#[derive(Debug, Clone)]
pub struct ChassisAlias {
    pub colloquial: String,
    pub canonical: String,
}

/// Evidence gathered from one pass over the input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extraction {
    pub make: Option<String>,
    pub model: Option<String>,
    pub chassis_code: Option<String>,
    pub year: Option<i32>,
    /// Combined additive score, capped at 1.0.
    pub score: f64,
}

/// Whether a token is shaped like a chassis code: one to three letters,
/// one to three digits, optionally one trailing letter.
fn chassis_shaped(token: &str) -> bool {
    let bytes = token.as_bytes();
    let letters = bytes.iter().take_while(|b| b.is_ascii_alphabetic()).count();
    if !(1..=3).contains(&letters) {
        return false;
    }
    let digits = bytes[letters..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if !(1..=3).contains(&digits) {
        return false;
    }
    match bytes.len() - letters - digits {
        0 => true,
        1 => bytes[letters + digits].is_ascii_alphabetic(),
        _ => false,
    }
}

/// Extract whatever evidence the input contains and score it.
pub fn extract(input: &str, tables: &ExtractionTables, as_of_year: i32) -> Extraction {
    let key = normalize_key(input);
    let toks = tokens(input);
    let mut out = Extraction::default();
    let mut score = 0.0;
    let mut model_awarded = false;

    // Plausible 4-digit year token.
    for token in &toks {
        if token.len() != 4 || !token.bytes().all(|b| b.is_ascii_digit()) {
            continue;
        }
        if let Ok(year) = token.parse::<i32>()
            && (1900..=as_of_year + 1).contains(&year)
        {
            out.year = Some(year);
            score += YEAR_WEIGHT;
            break;
        }
    }

    // Chassis-code-shaped tokens, colloquial alias table first (worth more:
    // an alias hit is deliberate shorthand, not coincidence).
    for token in &toks {
        if !chassis_shaped(token) {
            continue;
        }
        let (canonical, weight) = match tables
            .chassis_aliases
            .iter()
            .find(|a| normalize_key(&a.colloquial) == *token)
        {
            Some(alias) => (normalize_key(&alias.canonical), CHASSIS_ALIAS_WEIGHT),
            None => (token.clone(), CHASSIS_DIRECT_WEIGHT),
        };
        let Some(entry) = tables
            .chassis
            .iter()
            .find(|c| normalize_key(&c.code) == canonical)
        else {
            continue;
        };
        trace!(token, code = %entry.code, "chassis code matched");
        out.chassis_code = Some(entry.code.clone());
        out.make = Some(entry.make.clone());
        out.model = Some(entry.model.clone());
        score += weight + MODEL_WEIGHT;
        model_awarded = true;
        break;
    }

    // Make substring (or alias token) match.
    let mut matched_make: Option<&MakeEntry> = None;
    for make in &tables.makes {
        let name_key = normalize_key(&make.name);
        let hit = (!name_key.is_empty() && key.contains(&name_key))
            || make
                .aliases
                .iter()
                .any(|a| toks.contains(&normalize_key(a)));
        if hit {
            matched_make = Some(make);
            score += MAKE_WEIGHT;
            if out.make.is_none() {
                out.make = Some(make.name.clone());
            }
            break;
        }
    }

    // Model substring/alias within the matched make's table, ranked fuzzily
    // when several of the make's models match.
    if let Some(make) = matched_make
        && !model_awarded
    {
        // Gate on a substring hit (canonical name or alias), then rank the
        // gated canonical names fuzzily; ties fall to declaration order.
        let gated: Vec<usize> = make
            .models
            .iter()
            .enumerate()
            .filter(|(_, model)| {
                std::iter::once(model.name.as_str())
                    .chain(model.aliases.iter().map(String::as_str))
                    .any(|name| {
                        let name_key = normalize_key(name);
                        !name_key.is_empty() && key.contains(&name_key)
                    })
            })
            .map(|(i, _)| i)
            .collect();
        let ranked =
            fuzzy::best_match(&key, gated.iter().map(|&i| make.models[i].name.as_str()));
        if let Some((pos, _)) = ranked {
            out.model = Some(make.models[gated[pos]].name.clone());
            score += MODEL_WEIGHT;
        }
    }

    out.score = score.min(1.0);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables() -> ExtractionTables {
        ExtractionTables {
            makes: vec![
                MakeEntry {
                    name: "Nissan".into(),
                    aliases: vec![],
                    models: vec![
                        ModelEntry {
                            name: "Skyline GT-R".into(),
                            aliases: vec!["skyline".into(), "gtr".into()],
                        },
                        ModelEntry {
                            name: "Silvia".into(),
                            aliases: vec![],
                        },
                    ],
                },
                MakeEntry {
                    name: "Volkswagen".into(),
                    aliases: vec!["vw".into()],
                    models: vec![ModelEntry {
                        name: "Golf R".into(),
                        aliases: vec![],
                    }],
                },
            ],
            chassis: vec![ChassisEntry {
                code: "BNR32".into(),
                make: "Nissan".into(),
                model: "Skyline GT-R".into(),
            }],
            chassis_aliases: vec![ChassisAlias {
                colloquial: "r32".into(),
                canonical: "BNR32".into(),
            }],
        }
    }

    #[test]
    fn chassis_shapes() {
        assert!(chassis_shaped("bnr32"));
        assert!(chassis_shaped("ek9"));
        assert!(chassis_shaped("fd3s"));
        assert!(chassis_shaped("gc8"));
        assert!(!chassis_shaped("1995"));
        assert!(!chassis_shaped("nissan"));
        assert!(!chassis_shaped("gtr1234"));
    }

    #[test]
    fn year_and_make_and_model_accumulate() {
        let ex = extract("1995 Nissan Skyline", &tables(), 2026);
        assert_eq!(ex.year, Some(1995));
        assert_eq!(ex.make.as_deref(), Some("Nissan"));
        assert_eq!(ex.model.as_deref(), Some("Skyline GT-R"));
        // 0.3 year + 0.2 make + 0.3 model
        assert!((ex.score - 0.8).abs() < 1e-9);
    }

    #[test]
    fn direct_chassis_hit_alone_clears_floor() {
        let ex = extract("bnr32", &tables(), 2026);
        assert_eq!(ex.chassis_code.as_deref(), Some("BNR32"));
        assert_eq!(ex.model.as_deref(), Some("Skyline GT-R"));
        // 0.4 direct + 0.3 model pinned by the table entry
        assert!((ex.score - 0.7).abs() < 1e-9);
        assert!(ex.score > EXTRACTION_FLOOR);
    }

    #[test]
    fn alias_chassis_scores_higher_than_direct() {
        let ex = extract("selling my r32, runs great", &tables(), 2026);
        assert_eq!(ex.chassis_code.as_deref(), Some("BNR32"));
        assert!((ex.score - 0.9).abs() < 1e-9);
        assert!(ex.score > MEDIUM_THRESHOLD);
    }

    #[test]
    fn make_alias_token_matches() {
        let ex = extract("vw golf r 2018", &tables(), 2026);
        assert_eq!(ex.make.as_deref(), Some("Volkswagen"));
        assert_eq!(ex.model.as_deref(), Some("Golf R"));
        assert_eq!(ex.year, Some(2018));
    }

    #[test]
    fn implausible_year_ignored() {
        let ex = extract("nissan 1899", &tables(), 2026);
        assert_eq!(ex.year, None);
        let ex = extract("nissan 2031", &tables(), 2026);
        assert_eq!(ex.year, None);
    }

    #[test]
    fn closest_of_several_gated_models_wins() {
        // Both models pass the substring gate; "silvia" is contained
        // outright while "Skyline GT-R" only overlaps one token.
        let ex = extract("nissan skyline silvia swap", &tables(), 2026);
        assert_eq!(ex.model.as_deref(), Some("Silvia"));
    }

    #[test]
    fn nothing_recognized_scores_zero() {
        let ex = extract("blue car", &tables(), 2026);
        assert_eq!(ex.score, 0.0);
        assert!(ex.make.is_none());
    }

    #[test]
    fn score_is_capped_at_one() {
        let ex = extract("1995 nissan skyline r32", &tables(), 2026);
        // 0.3 + 0.6 + 0.3 + 0.2 would be 1.4 uncapped
        assert_eq!(ex.score, 1.0);
    }
}
