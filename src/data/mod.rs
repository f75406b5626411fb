//! Built-in reference dataset.
//!
//! Everything the resolver and engine consume is injected reference
//! data; this module materializes the production tables. Tests that
//! need small fixture tables build their own [`StaticReference`] /
//! [`ExtractionTables`] / [`RuleSet`] instead.

mod rules;
mod vehicles;
mod wmi;

pub use rules::builtin_rules;
pub use wmi::WMI_TABLE;

use crate::core::{VehicleRecord, YearRange};
use crate::resolver::{ChassisAlias, ChassisEntry, ExtractionTables, MakeEntry, ModelEntry};
use crate::store::StaticReference;
use vehicles::{MAKE_ALIASES, VEHICLES};

/// Vehicle reference store built from the catalog: exact keys
/// ("Nissan Skyline GT-R"), colloquial aliases ("r32", "evo ix"),
/// chassis codes as aliases ("BNR32"), and production spans.
pub fn builtin_reference() -> StaticReference {
    let mut store = StaticReference::new();
    for spec in VEHICLES {
        let record = VehicleRecord::new(spec.make, spec.model);
        store.insert_exact(&format!("{} {}", spec.make, spec.model), record.clone());
        for alias in spec.model_aliases {
            store.insert_alias(alias, record.clone());
        }

        let mut start = i32::MAX;
        let mut end = i32::MIN;
        for generation in spec.generations {
            start = start.min(generation.start);
            end = end.max(generation.end);
            let gen_record = record.clone().with_chassis(generation.chassis);
            store.insert_alias(generation.chassis, gen_record.clone());
            for alias in generation.aliases {
                store.insert_alias(alias, gen_record.clone());
            }
        }
        if !spec.generations.is_empty() {
            store.insert_production(spec.make, spec.model, YearRange::new(start, end));
        }
    }
    store
}

/// Extraction tables built from the catalog: makes (with colloquial
/// make aliases) in declaration order, per-make model tables, chassis
/// codes, and single-token chassis shorthand.
pub fn builtin_tables() -> ExtractionTables {
    let mut tables = ExtractionTables::default();
    for spec in VEHICLES {
        let make_idx = match tables.makes.iter().position(|m| m.name == spec.make) {
            Some(idx) => idx,
            None => {
                tables.makes.push(MakeEntry {
                    name: spec.make.to_string(),
                    aliases: MAKE_ALIASES
                        .iter()
                        .filter(|(_, canonical)| *canonical == spec.make)
                        .map(|(alias, _)| alias.to_string())
                        .collect(),
                    models: Vec::new(),
                });
                tables.makes.len() - 1
            }
        };
        tables.makes[make_idx].models.push(ModelEntry {
            name: spec.model.to_string(),
            aliases: spec.model_aliases.iter().map(|a| a.to_string()).collect(),
        });

        for generation in spec.generations {
            tables.chassis.push(ChassisEntry {
                code: generation.chassis.to_string(),
                make: spec.make.to_string(),
                model: spec.model.to_string(),
            });
            for alias in generation.aliases {
                // Multi-word shorthand can't appear as a single token;
                // it is only reachable through the alias store.
                if !alias.contains(' ') {
                    tables.chassis_aliases.push(ChassisAlias {
                        colloquial: alias.to_string(),
                        canonical: generation.chassis.to_string(),
                    });
                }
            }
        }
    }
    tables
}
