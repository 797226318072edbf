//! Suggestion engine and scoring for partial identity queries.
//!
//! Given any subset of the "NOM PERE GRANDPERE" triple, the engine ranks
//! registry records for autocomplete-style suggestion:
//!
//! 1. **Threshold filter**: every provided field must at least be contained
//!    in the record's corresponding field (after normalization), or the
//!    record is excluded.
//! 2. **Scoring ladder**: per field, exact equality beats prefix beats
//!    containment; the person's own name carries the most weight.
//! 3. **Stable ranking**: a flat clan bonus separates otherwise-tied
//!    records, and remaining ties keep registry order.
//!
//! ## Example
//!
//! ```rust,no_run
//! use lignage::{PersonQuery, PersonRegistry, SuggestEngine};
//!
//! let registry = PersonRegistry::load_embedded().unwrap();
//! let engine = SuggestEngine::new(&registry);
//!
//! let query = PersonQuery {
//!     nom: Some("issa".into()),
//!     ..Default::default()
//! };
//! for m in engine.suggest(&query, 12) {
//!     println!("{}: {}", m.person.display_name(), m.score);
//! }
//! ```

pub mod engine;
pub mod scoring;

pub use engine::{PersonQuery, SuggestEngine, SuggestMatch, DEFAULT_SUGGEST_LIMIT};
pub use scoring::{FieldWeights, SuggestWeights};
