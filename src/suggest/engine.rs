use serde::{Deserialize, Serialize};

use crate::core::person::Person;
use crate::registry::store::PersonRegistry;
use crate::suggest::scoring::{score_field, SuggestWeights};
use crate::utils::normalize::{norm, norm_opt};

/// Default number of suggestions returned
pub const DEFAULT_SUGGEST_LIMIT: usize = 12;

/// A partial identity query: any subset of the "NOM PERE GRANDPERE" triple.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonQuery {
    pub nom: Option<String>,
    pub nom_pere: Option<String>,
    pub nom_grand_pere: Option<String>,
}

/// A scored suggestion
#[derive(Debug, Clone, Serialize)]
pub struct SuggestMatch {
    pub person: Person,
    pub score: u32,
}

/// Ranks registry records against a partial identity query for
/// autocomplete-style suggestion.
pub struct SuggestEngine<'a> {
    registry: &'a PersonRegistry,
    weights: SuggestWeights,
}

impl<'a> SuggestEngine<'a> {
    /// Create an engine with the default weights
    pub fn new(registry: &'a PersonRegistry) -> Self {
        Self {
            registry,
            weights: SuggestWeights::default(),
        }
    }

    /// Create an engine with custom weights
    pub fn with_weights(registry: &'a PersonRegistry, weights: SuggestWeights) -> Self {
        Self { registry, weights }
    }

    /// Rank records against the query.
    ///
    /// Every provided field must clear its minimum threshold (substring
    /// containment after normalization) or the record is excluded; empty
    /// fields impose no constraint. An entirely empty query suggests
    /// nothing — there is no "browse all" behavior. Ties keep registry
    /// order.
    pub fn suggest(&self, query: &PersonQuery, limit: usize) -> Vec<SuggestMatch> {
        let q_nom = norm_opt(query.nom.as_deref());
        let q_pere = norm_opt(query.nom_pere.as_deref());
        let q_grand_pere = norm_opt(query.nom_grand_pere.as_deref());

        if q_nom.is_empty() && q_pere.is_empty() && q_grand_pere.is_empty() {
            return Vec::new();
        }

        let mut results: Vec<SuggestMatch> = Vec::new();

        for person in &self.registry.persons {
            let mut score = 0u32;

            if !q_nom.is_empty() {
                match score_field(&q_nom, &norm(&person.nom), &self.weights.nom) {
                    Some(points) => score += points,
                    None => continue,
                }
            }

            if !q_pere.is_empty() {
                match score_field(
                    &q_pere,
                    &norm_opt(person.nom_pere.as_deref()),
                    &self.weights.nom_pere,
                ) {
                    Some(points) => score += points,
                    None => continue,
                }
            }

            if !q_grand_pere.is_empty() {
                match score_field(
                    &q_grand_pere,
                    &norm_opt(person.nom_grand_pere.as_deref()),
                    &self.weights.nom_grand_pere,
                ) {
                    Some(points) => score += points,
                    None => continue,
                }
            }

            if person.clan.as_deref().is_some_and(|c| !c.trim().is_empty()) {
                score += self.weights.clan_bonus;
            }

            results.push(SuggestMatch {
                person: person.clone(),
                score,
            });
        }

        // Stable sort: equal scores keep registry order
        results.sort_by(|a, b| b.score.cmp(&a.score));
        results.truncate(limit);
        results
    }

    /// Case-insensitive substring search over full display names,
    /// sorted by display name. Empty input finds nothing.
    pub fn search(&self, text: &str) -> Vec<Person> {
        let needle = text.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        let mut found: Vec<Person> = self
            .registry
            .persons
            .iter()
            .filter(|p| p.display_name().to_lowercase().contains(&needle))
            .cloned()
            .collect();

        found.sort_by(|a, b| a.display_name().cmp(&b.display_name()));
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::PersonId;

    fn registry() -> PersonRegistry {
        PersonRegistry::load_embedded().unwrap()
    }

    fn query(nom: &str, pere: &str, grand_pere: &str) -> PersonQuery {
        let opt = |s: &str| (!s.is_empty()).then(|| s.to_string());
        PersonQuery {
            nom: opt(nom),
            nom_pere: opt(pere),
            nom_grand_pere: opt(grand_pere),
        }
    }

    #[test]
    fn test_empty_query_suggests_nothing() {
        let registry = registry();
        let engine = SuggestEngine::new(&registry);

        assert!(engine.suggest(&PersonQuery::default(), 10).is_empty());
        assert!(engine
            .suggest(&query("", "", ""), DEFAULT_SUGGEST_LIMIT)
            .is_empty());
        // Whitespace-only fields normalize to empty
        assert!(engine
            .suggest(&query("   ", "", ""), DEFAULT_SUGGEST_LIMIT)
            .is_empty());
    }

    #[test]
    fn test_case_insensitive_exact_scores_exact() {
        let registry = registry();
        let engine = SuggestEngine::new(&registry);

        // "zalia" vs stored "ZALIA": exact after normalization, so 60 — not
        // the prefix score. ZALIA has no clan, so no bonus.
        let results = engine.suggest(&query("zalia", "", ""), 10);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].person.id, PersonId::new("zalia_youssouf_000004"));
        assert_eq!(results[0].score, 60);
    }

    #[test]
    fn test_clan_bonus_stabilizes_ties() {
        let registry = registry();
        let engine = SuggestEngine::new(&registry);

        // Both ISSA records match exactly; issa_said has a clan (+1),
        // issa_bacar does not.
        let results = engine.suggest(&query("issa", "", ""), 10);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].person.id, PersonId::new("issa_said_000010"));
        assert_eq!(results[0].score, 61);
        assert_eq!(results[1].person.id, PersonId::new("issa_bacar_000030"));
        assert_eq!(results[1].score, 60);
    }

    #[test]
    fn test_provided_field_must_clear_threshold() {
        let registry = registry();
        let engine = SuggestEngine::new(&registry);

        // Right nom, wrong father: excluded entirely
        let results = engine.suggest(&query("issa", "moussa", ""), 10);
        assert!(results.is_empty());
    }

    #[test]
    fn test_father_field_disambiguates_homonyms() {
        let registry = registry();
        let engine = SuggestEngine::new(&registry);

        let results = engine.suggest(&query("issa", "bacar", ""), 10);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].person.id, PersonId::new("issa_bacar_000030"));
        // exact nom (60) + exact father (25), no clan
        assert_eq!(results[0].score, 85);
    }

    #[test]
    fn test_prefix_and_contains_scores_add_up() {
        let registry = registry();
        let engine = SuggestEngine::new(&registry);

        // "sa" prefixes SAID and SALIM; contained in ISSA and HASSAN
        let results = engine.suggest(&query("sa", "", ""), 10);
        let by_id = |id: &str| {
            results
                .iter()
                .find(|m| m.person.id.as_str() == id)
                .map(|m| m.score)
        };

        assert_eq!(by_id("said_omar_000001"), Some(46)); // prefix 45 + clan 1
        assert_eq!(by_id("salim_hassan_000022"), Some(45)); // prefix, no clan
        assert_eq!(by_id("issa_said_000010"), Some(31)); // contains 30 + clan 1
        assert_eq!(by_id("hassan_moussa_000005"), Some(31));
    }

    #[test]
    fn test_ties_keep_registry_order() {
        let registry = registry();
        let engine = SuggestEngine::new(&registry);

        // ISSA (clan, 31) and HASSAN (clan, 31) tie; ISSA was loaded after
        // HASSAN, so HASSAN comes first among the ties
        let results = engine.suggest(&query("sa", "", ""), 10);
        let tied: Vec<&str> = results
            .iter()
            .filter(|m| m.score == 31)
            .map(|m| m.person.id.as_str())
            .collect();
        assert_eq!(tied, vec!["hassan_moussa_000005", "issa_said_000010"]);
    }

    #[test]
    fn test_limit_truncates() {
        let registry = registry();
        let engine = SuggestEngine::new(&registry);

        let all = engine.suggest(&query("sa", "", ""), 10);
        assert!(all.len() > 2);

        let top = engine.suggest(&query("sa", "", ""), 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].person.id, all[0].person.id);
    }

    #[test]
    fn test_grandfather_only_query() {
        let registry = registry();
        let engine = SuggestEngine::new(&registry);

        let results = engine.suggest(&query("", "", "omar"), 10);
        // ISSA, AMINA, DAOUD, HALIMA all have nomGrandPere OMAR
        assert_eq!(results.len(), 4);
        assert!(results.iter().all(|m| m.score >= 15));
    }

    #[test]
    fn test_search_full_display_name() {
        let registry = registry();
        let engine = SuggestEngine::new(&registry);

        let found = engine.search("said omar");
        let noms: Vec<&str> = found.iter().map(|p| p.nom.as_str()).collect();
        // "SAID OMAR BACAR" matches too; sorted by display name
        assert_eq!(noms, vec!["AMINA", "DAOUD", "HALIMA", "ISSA", "SAID"]);

        assert!(engine.search("").is_empty());
        assert!(engine.search("   ").is_empty());
        assert!(engine.search("no such person").is_empty());
    }
}
