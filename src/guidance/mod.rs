//! Fallback guidance when resolution confidence is too low to act on.
//!
//! A deterministic template over which identity fields are present —
//! no inference happens here. The goal is that the caller never shows
//! a bare "no result": there is always a concrete next step.

use serde::{Deserialize, Serialize};

use crate::core::VehicleIdentity;

/// Identity fields the caller should supply to improve resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingField {
    Make,
    Model,
    Year,
}

/// Structured clarification prompts for a low-confidence resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guidance {
    /// Fields absent from the partial identity, in make/model/year order.
    pub missing_fields: Vec<MissingField>,
    /// Well-formed example inputs, always including at least one
    /// VIN-shaped and one chassis-code-shaped example.
    pub example_inputs: Vec<String>,
    /// Ordered suggestions, most effective first.
    pub next_steps: Vec<String>,
}

/// Build guidance from whatever the resolver managed to extract.
pub fn generate(identity: &VehicleIdentity) -> Guidance {
    let mut missing_fields = Vec::new();
    if identity.make.is_none() {
        missing_fields.push(MissingField::Make);
    }
    if identity.model.is_none() {
        missing_fields.push(MissingField::Model);
    }
    if identity.year.is_none() && identity.year_range.is_none() {
        missing_fields.push(MissingField::Year);
    }

    let example_inputs = vec![
        // VIN-shaped
        "JN1CV6AP7FM123456".to_string(),
        // Chassis-code-shaped
        "BNR32".to_string(),
        "1995 Nissan Skyline GT-R".to_string(),
        "Toyota Supra".to_string(),
    ];

    let mut next_steps = vec![
        "Check the title, registration, or door-jamb plate for the 17-character VIN — it gives the most reliable answer.".to_string(),
    ];
    if identity.make.is_none() || identity.model.is_none() {
        next_steps.push(
            "State the manufacturer and model name together, e.g. \"Nissan Skyline GT-R\"."
                .to_string(),
        );
    }
    if identity.year.is_none() && identity.year_range.is_none() {
        next_steps.push(
            "Include the model year as a 4-digit number, e.g. \"1995\".".to_string(),
        );
    }
    next_steps.push(
        "If you know the platform, the chassis code alone often identifies the exact generation, e.g. \"BNR32\" or \"EK9\"."
            .to_string(),
    );

    Guidance {
        missing_fields,
        example_inputs,
        next_steps,
    }
}
