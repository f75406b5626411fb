//! # kuruma
//!
//! Vehicle identification and import-eligibility library: VIN decoding,
//! cascading identifier resolution (VIN, exact name, colloquial alias,
//! partial extraction), per-country import eligibility, and guided
//! assistance when an identifier cannot be resolved.
//!
//! Identification never hard-fails on input content. Every query yields
//! a [`VehicleIdentity`] whose [`Confidence`] and quality flags carry
//! the uncertainty; only store and configuration failures surface as
//! [`EngineError`].
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use kuruma::{Confidence, Engine};
//!
//! let engine = Engine::builtin().as_of(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
//!
//! let assessment = engine.resolve_and_infer("r32", &["US", "DE"]).unwrap();
//! assert_eq!(assessment.identity.make.as_deref(), Some("Nissan"));
//! assert_eq!(assessment.identity.confidence, Confidence::Medium);
//! assert!(assessment.verdicts["US"].eligible);
//! ```

pub mod core;
pub mod data;
pub mod eligibility;
mod engine;
pub mod guidance;
pub mod resolver;
pub mod store;
pub mod vin;

pub use crate::core::{
    CalculationMethod, Confidence, EligibilityRule, EligibilityVerdict, EngineError, QualityFlag,
    ResolutionSource, StoreError, VehicleIdentity, VehicleRecord, YearRange,
};
pub use engine::{Assessment, Engine};
pub use guidance::{Guidance, MissingField};
pub use resolver::Resolution;
pub use store::{RuleSet, RuleSource, StaticReference, VehicleReference};
pub use vin::{VinDecode, VinDecoder, WmiEntry, is_valid_vin};
