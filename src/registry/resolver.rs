use crate::core::person::Person;
use crate::core::types::PersonId;
use crate::registry::store::PersonRegistry;
use crate::utils::normalize::norm;

/// Prefix carried by legacy identifiers ("p_issa" era)
pub const LEGACY_PREFIX: &str = "p_";

impl PersonRegistry {
    /// Resolve a loosely-formatted or legacy identifier to a canonical id.
    ///
    /// Resolution order, first match wins:
    ///
    /// 1. Exact match against a stored id.
    /// 2. Legacy-prefix compatibility: the input with `p_` stripped if it
    ///    carries the prefix, or with `p_` added if it doesn't.
    /// 3. Name fallback: the prefix-stripped input, normalized, matched
    ///    against every record's normalized `nom`. Homonyms resolve to the
    ///    lexicographically smallest id — deterministic, not semantically
    ///    meaningful.
    ///
    /// Blank input and exhausted fallbacks return `None`.
    pub fn resolve_id(&self, input: &str) -> Option<PersonId> {
        let raw = input.trim();
        if raw.is_empty() {
            return None;
        }

        // 1) direct match
        let direct = PersonId::new(raw);
        if self.contains(&direct) {
            return Some(direct);
        }

        // 2) legacy prefix compatibility
        if let Some(without) = raw.strip_prefix(LEGACY_PREFIX) {
            let candidate = PersonId::new(without);
            if self.contains(&candidate) {
                return Some(candidate);
            }
        } else {
            let candidate = PersonId::new(format!("{LEGACY_PREFIX}{raw}"));
            if self.contains(&candidate) {
                return Some(candidate);
            }
        }

        // 3) name fallback on the prefix-stripped slug
        let slug = raw.strip_prefix(LEGACY_PREFIX).unwrap_or(raw);
        let candidates = self.indices_by_normalized_name(&norm(slug));

        candidates
            .iter()
            .map(|&idx| &self.persons[idx].id)
            .min()
            .cloned()
    }

    /// Resolve an identifier and return the person record.
    ///
    /// Tolerates the same legacy formats as `resolve_id`; every other
    /// component goes through this before doing graph work.
    pub fn resolve(&self, input: &str) -> Option<&Person> {
        let id = self.resolve_id(input)?;
        self.get(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> PersonRegistry {
        PersonRegistry::load_embedded().unwrap()
    }

    #[test]
    fn test_resolve_exact_id() {
        let registry = registry();
        for person in &registry.persons {
            let resolved = registry.resolve(person.id.as_str()).unwrap();
            assert_eq!(resolved.id, person.id);
        }
    }

    #[test]
    fn test_resolve_blank_input() {
        let registry = registry();
        assert!(registry.resolve_id("").is_none());
        assert!(registry.resolve_id("   ").is_none());
    }

    #[test]
    fn test_resolve_legacy_prefix_stripped() {
        // "p_" + real id resolves to the unprefixed record
        let registry = registry();
        let resolved = registry.resolve_id("p_issa_said_000010").unwrap();
        assert_eq!(resolved, PersonId::new("issa_said_000010"));
    }

    #[test]
    fn test_resolve_legacy_prefix_added() {
        let json = r#"{
            "version": "1.0.0",
            "created_at": "2026-01-01T00:00:00Z",
            "persons": [
                {"id": "p_issa", "nom": "ISSA", "sexe": "m"}
            ]
        }"#;
        let registry = PersonRegistry::from_json(json).unwrap();

        let resolved = registry.resolve_id("issa").unwrap();
        assert_eq!(resolved, PersonId::new("p_issa"));
    }

    #[test]
    fn test_resolve_by_name_case_insensitive() {
        let registry = registry();
        let resolved = registry.resolve_id("zalia").unwrap();
        assert_eq!(resolved, PersonId::new("zalia_youssouf_000004"));

        let resolved = registry.resolve_id("ZALIA").unwrap();
        assert_eq!(resolved, PersonId::new("zalia_youssouf_000004"));
    }

    #[test]
    fn test_resolve_by_name_strips_diacritics() {
        let json = r#"{
            "version": "1.0.0",
            "created_at": "2026-01-01T00:00:00Z",
            "persons": [
                {"id": "moina_ali_000002", "nom": "MOÏNA", "sexe": "f"}
            ]
        }"#;
        let registry = PersonRegistry::from_json(json).unwrap();

        let resolved = registry.resolve_id("moina").unwrap();
        assert_eq!(resolved, PersonId::new("moina_ali_000002"));
    }

    #[test]
    fn test_resolve_legacy_name_with_prefix() {
        let registry = registry();
        // "p_zalia" -> strip prefix -> name fallback
        let resolved = registry.resolve_id("p_zalia").unwrap();
        assert_eq!(resolved, PersonId::new("zalia_youssouf_000004"));
    }

    #[test]
    fn test_resolve_homonym_smallest_id() {
        let registry = registry();
        // Two ISSA records; the lexicographically smallest id wins
        let resolved = registry.resolve_id("issa").unwrap();
        assert_eq!(resolved, PersonId::new("issa_bacar_000030"));
    }

    #[test]
    fn test_resolve_unknown_name() {
        let registry = registry();
        assert!(registry.resolve_id("nobody").is_none());
        assert!(registry.resolve("p_nobody").is_none());
    }
}
