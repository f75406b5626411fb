//! Core data model and errors.
//!
//! Everything here is constructed fresh per request, never mutated after
//! construction, and discarded with the response. Persistence belongs to
//! the reference stores, not to this crate.

mod error;
mod types;

pub use error::*;
pub use types::*;
