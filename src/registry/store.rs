use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

use crate::core::person::Person;
use crate::core::types::PersonId;
use crate::utils::normalize::norm;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Failed to read dataset: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse dataset: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Dataset version for compatibility checking
pub const DATASET_VERSION: &str = "1.0.0";

/// Serializable dataset format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryData {
    pub version: String,
    pub created_at: String,
    pub persons: Vec<Person>,
}

/// The immutable person registry with indexes.
///
/// Loaded once before any query runs; every operation afterwards is a
/// read. Id lookup, children-of-parent lookup, and normalized-name lookup
/// are all O(1) against maps built at load time, so graph traversal never
/// scans the full record list.
#[derive(Debug)]
pub struct PersonRegistry {
    /// All person records, in dataset order
    pub persons: Vec<Person>,

    /// Index: person id -> index in persons vec
    id_to_index: HashMap<PersonId, usize>,

    /// Index: parent id -> indices of that parent's children (dataset order)
    children_index: HashMap<PersonId, Vec<usize>>,

    /// Index: normalized `nom` -> indices of records bearing that name
    name_index: HashMap<String, Vec<usize>>,
}

impl PersonRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            persons: Vec::new(),
            id_to_index: HashMap::new(),
            children_index: HashMap::new(),
            name_index: HashMap::new(),
        }
    }

    /// Load the embedded default dataset
    pub fn load_embedded() -> Result<Self, RegistryError> {
        // Embedded at compile time; validated by build.rs
        const EMBEDDED_DATASET: &str = include_str!("../../data/personnes.json");
        Self::from_json(EMBEDDED_DATASET)
    }

    /// Load a dataset from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, RegistryError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse a dataset from a JSON string
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let data: RegistryData = serde_json::from_str(json)?;

        // Version check (warn but don't fail)
        if data.version != DATASET_VERSION {
            tracing::warn!(
                "Dataset version mismatch (expected {}, found {})",
                DATASET_VERSION,
                data.version
            );
        }

        let mut registry = Self::new();
        for person in data.persons {
            registry.add_person(person);
        }

        Ok(registry)
    }

    /// Add a person to the registry and update the indexes
    pub fn add_person(&mut self, person: Person) {
        let index = self.persons.len();

        // Index by id
        self.id_to_index.insert(person.id.clone(), index);

        // Index as a child of each recorded parent
        if let Some(pere_id) = &person.pere_id {
            self.children_index
                .entry(pere_id.clone())
                .or_default()
                .push(index);
        }
        if let Some(mere_id) = &person.mere_id {
            self.children_index
                .entry(mere_id.clone())
                .or_default()
                .push(index);
        }

        // Index by normalized name
        self.name_index
            .entry(norm(&person.nom))
            .or_default()
            .push(index);

        self.persons.push(person);
    }

    /// Get a person by canonical id (no legacy tolerance; see `resolve`)
    pub fn get(&self, id: &PersonId) -> Option<&Person> {
        self.id_to_index.get(id).map(|&idx| &self.persons[idx])
    }

    /// True when the exact id is present in the registry
    pub fn contains(&self, id: &PersonId) -> bool {
        self.id_to_index.contains_key(id)
    }

    /// Children of the given parent, in dataset order.
    ///
    /// This is the raw adjacency used by graph traversal; display-ordered
    /// children come from `FamilyAccessor::children_of`.
    pub fn children_indices(&self, parent: &PersonId) -> &[usize] {
        self.children_index
            .get(parent)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Records whose normalized `nom` equals the given normalized name,
    /// in dataset order.
    pub(crate) fn indices_by_normalized_name(&self, normalized: &str) -> &[usize] {
        self.name_index
            .get(normalized)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Person record by position in the dataset
    pub fn by_index(&self, index: usize) -> Option<&Person> {
        self.persons.get(index)
    }

    /// Export the dataset to JSON
    pub fn to_json(&self) -> Result<String, RegistryError> {
        let data = RegistryData {
            version: DATASET_VERSION.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            persons: self.persons.clone(),
        };
        Ok(serde_json::to_string_pretty(&data)?)
    }

    /// Number of persons in the registry
    pub fn len(&self) -> usize {
        self.persons.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }
}

impl Default for PersonRegistry {
    fn default() -> Self {
        Self::new()
    }
}
