//! Core data types for the genealogy engine.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`Person`]: A single person record with names, sex, clan, and parent links
//! - [`PersonId`]: Canonical identifier of a record in the registry
//! - [`Sexe`], [`StepKind`]: Classification types for records and kinship steps
//!
//! ## Identity model
//!
//! A person carries two kinds of name data: the relationship *edges*
//! (`pereId`/`mereId`, resolved against the registry) and the names *as
//! written* (`nom`, `nomPere`, `nomGrandPere`) which form the "NOM PERE
//! GRANDPERE" display name. Only the edges participate in graph traversal;
//! the written names exist for display and fuzzy matching.

pub mod person;
pub mod types;
