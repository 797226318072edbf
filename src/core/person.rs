use serde::{Deserialize, Serialize};

use crate::core::types::{PersonId, Sexe};

/// A person record in the registry.
///
/// Wire field names stay camelCase (`nomPere`, `pereId`, ...) for
/// compatibility with existing datasets. `pere_id`/`mere_id` are the only
/// relationship edges in the graph; `nom_pere`/`nom_grand_pere` are the
/// father's and paternal grandfather's names *as written*, kept for display
/// and disambiguation only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    /// Unique identifier, assigned externally at data-load time
    pub id: PersonId,

    /// Given name
    pub nom: String,

    /// Father's name as written
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nom_pere: Option<String>,

    /// Paternal grandfather's name as written
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nom_grand_pere: Option<String>,

    pub sexe: Sexe,

    /// Optional affiliation label, display-only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clan: Option<String>,

    /// Father record, when known. Absence means unknown/unrecorded, not "no father".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pere_id: Option<PersonId>,

    /// Mother record, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mere_id: Option<PersonId>,

    /// Twin sibling, when recorded. Informational only, not a graph edge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jumeau_id: Option<PersonId>,
}

impl Person {
    /// Full display name: "NOM PERE GRANDPERE", skipping missing parts.
    #[must_use]
    pub fn display_name(&self) -> String {
        let mut parts: Vec<&str> = vec![self.nom.trim()];
        if let Some(pere) = &self.nom_pere {
            parts.push(pere.trim());
        }
        if let Some(grand_pere) = &self.nom_grand_pere {
            parts.push(grand_pere.trim());
        }
        parts.retain(|p| !p.is_empty());
        parts.join(" ")
    }
}
