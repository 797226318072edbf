use serde::{Deserialize, Serialize};

/// Points awarded to one query field by match quality, best to worst:
/// exact normalized equality, prefix match, substring containment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FieldWeights {
    pub exact: u32,
    pub prefix: u32,
    pub contains: u32,
}

/// Configurable weights for the suggestion scorer.
///
/// The defaults weight a person's own name highest, the father's name next,
/// the grandfather's name least — field weights reflect disambiguation
/// value. The clan bonus is a flat +1 applied to any record with a clan,
/// purely to stabilize ordering among otherwise-tied records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestWeights {
    pub nom: FieldWeights,
    pub nom_pere: FieldWeights,
    pub nom_grand_pere: FieldWeights,
    pub clan_bonus: u32,
}

impl Default for SuggestWeights {
    fn default() -> Self {
        Self {
            nom: FieldWeights {
                exact: 60,
                prefix: 45,
                contains: 30,
            },
            nom_pere: FieldWeights {
                exact: 25,
                prefix: 15,
                contains: 8,
            },
            nom_grand_pere: FieldWeights {
                exact: 15,
                prefix: 10,
                contains: 5,
            },
            clan_bonus: 1,
        }
    }
}

/// Score one record field against one (non-empty, normalized) query field.
///
/// `None` means the field fails its minimum threshold and the record must
/// be excluded entirely.
pub fn score_field(query: &str, record: &str, weights: &FieldWeights) -> Option<u32> {
    if record == query {
        Some(weights.exact)
    } else if record.starts_with(query) {
        Some(weights.prefix)
    } else if record.contains(query) {
        Some(weights.contains)
    } else {
        None
    }
}
