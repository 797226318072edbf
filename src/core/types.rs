use serde::{Deserialize, Serialize};

/// Unique identifier for a person in the registry
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PersonId(pub String);

impl PersonId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PersonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Recorded sex of a person; decides the union role (father vs mother)
/// the person plays in a parent/child pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sexe {
    #[serde(rename = "m")]
    Male,
    #[serde(rename = "f")]
    Female,
}

impl std::fmt::Display for Sexe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Male => write!(f, "m"),
            Self::Female => write!(f, "f"),
        }
    }
}

/// Kind of one step in a kinship chain, seen from the step's `from` side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    /// Step to the father
    Pere,
    /// Step to the mother
    Mere,
    /// Step down to a child
    Enfant,
}

impl StepKind {
    /// True for the two upward (parent-directed) step kinds.
    #[must_use]
    pub fn is_parent_directed(self) -> bool {
        matches!(self, Self::Pere | Self::Mere)
    }
}

impl std::fmt::Display for StepKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pere => write!(f, "pere"),
            Self::Mere => write!(f, "mere"),
            Self::Enfant => write!(f, "enfant"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_id_display() {
        let id = PersonId::new("issa_said_000010");
        assert_eq!(format!("{id}"), "issa_said_000010");
    }

    #[test]
    fn test_sexe_wire_format() {
        assert_eq!(serde_json::to_string(&Sexe::Male).unwrap(), "\"m\"");
        assert_eq!(serde_json::to_string(&Sexe::Female).unwrap(), "\"f\"");
        let parsed: Sexe = serde_json::from_str("\"f\"").unwrap();
        assert_eq!(parsed, Sexe::Female);
    }

    #[test]
    fn test_step_kind_wire_format() {
        assert_eq!(serde_json::to_string(&StepKind::Pere).unwrap(), "\"pere\"");
        assert_eq!(
            serde_json::to_string(&StepKind::Enfant).unwrap(),
            "\"enfant\""
        );
    }

    #[test]
    fn test_step_kind_direction() {
        assert!(StepKind::Pere.is_parent_directed());
        assert!(StepKind::Mere.is_parent_directed());
        assert!(!StepKind::Enfant.is_parent_directed());
    }
}
