//! # lignage
//!
//! A library for answering kinship questions over a genealogical registry.
//!
//! Given a flat list of person records — each carrying at most a father link
//! and a mother link — `lignage` answers two questions: what does a person's
//! family look like (parents, children, unions), and what is the shortest
//! chain of parent/child relationships connecting two people, including
//! which shared ancestor the two sides descend from.
//!
//! ## Features
//!
//! - **Legacy-tolerant identifier resolution**: exact ids, `p_`-prefixed
//!   legacy ids, and name-based fallback with a deterministic homonym policy
//! - **Family units on demand**: children grouped into unions by the other
//!   parent, with an explicit unknown-partner bucket
//! - **Shortest kinship chains**: breadth-first search walking parent/child
//!   edges in either direction
//! - **Pivot resolution**: turns a raw chain into "common ancestor + two
//!   downward branches + the ancestor's partner" for diagram rendering
//! - **Weighted suggestions**: ranks records against a partial
//!   (nom, nomPere, nomGrandPere) query for autocomplete
//!
//! ## Example
//!
//! ```rust,no_run
//! use lignage::{PathFinder, PersonRegistry, PivotResolver};
//!
//! // Load the embedded demo dataset
//! let registry = PersonRegistry::load_embedded().unwrap();
//!
//! // Shortest kinship chain between two people
//! let finder = PathFinder::new(&registry);
//! if let Some(path) = finder.find_path("omar_issa_000020", "salim_hassan_000022") {
//!     for step in &path {
//!         println!("{} -[{}]-> {}", step.from_id, step.kind, step.to_id);
//!     }
//!
//!     // Which ancestor do the two sides branch from?
//!     let resolver = PivotResolver::new(&registry);
//!     if let Some(pivot) = resolver.resolve(&path, "omar_issa_000020") {
//!         println!("common ancestor: {}", pivot.pivot_id);
//!     }
//! }
//! ```
//!
//! ## Modules
//!
//! - [`registry`]: Person record storage, indexing, identifier resolution
//! - [`core`]: Core data types for persons, identifiers, and kinship steps
//! - [`kinship`]: Relationship accessors, path search, pivot resolution
//! - [`suggest`]: Suggestion engine and scoring
//! - [`cli`]: Command-line interface implementation
//! - [`web`]: JSON API server for browser-based exploration

pub mod cli;
pub mod core;
pub mod kinship;
pub mod registry;
pub mod suggest;
pub mod utils;
pub mod web;

// Re-export commonly used types for convenience
pub use core::person::Person;
pub use core::types::{PersonId, Sexe, StepKind};
pub use kinship::path::{KinStep, PathFinder};
pub use kinship::pivot::{PivotResolution, PivotResolver};
pub use kinship::relations::{FamilyAccessor, Relatives, Union};
pub use registry::store::PersonRegistry;
pub use suggest::engine::{PersonQuery, SuggestEngine, SuggestMatch};
