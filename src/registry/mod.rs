//! Person registry: storage, indexing, and identifier resolution.
//!
//! The registry holds the immutable list of person records loaded once at
//! startup. A demo dataset is embedded into the binary, but custom datasets
//! can also be loaded from JSON files.
//!
//! ## Example
//!
//! ```rust,no_run
//! use lignage::PersonRegistry;
//! use lignage::core::types::PersonId;
//!
//! // Load the embedded dataset
//! let registry = PersonRegistry::load_embedded().unwrap();
//!
//! // Canonical lookup
//! let person = registry.get(&PersonId::new("issa_said_000010"));
//!
//! // Legacy-tolerant lookup ("p_" prefix, name fallback)
//! let person = registry.resolve("p_issa");
//! ```
//!
//! ## Custom Datasets
//!
//! ```rust,no_run
//! use lignage::PersonRegistry;
//! use std::path::Path;
//!
//! let registry = PersonRegistry::load_from_file(Path::new("my_persons.json")).unwrap();
//! let json = registry.to_json().unwrap();
//! ```

pub mod resolver;
pub mod store;

pub use resolver::LEGACY_PREFIX;
pub use store::{PersonRegistry, RegistryData, RegistryError};
