use serde::Serialize;

use crate::core::person::Person;
use crate::core::types::PersonId;
use crate::kinship::path::KinStep;
use crate::kinship::relations::FamilyAccessor;
use crate::registry::store::PersonRegistry;

/// A kinship path reinterpreted for rendering: the nearest common ancestor
/// ("pivot"), the two children of that ancestor the sides descend through,
/// and the ancestor's partner in the union that produced them.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PivotResolution {
    /// The branching ancestor (or the midpoint under the fallback policy)
    pub pivot_id: PersonId,

    /// The pivot's neighbor on the "from" side of the chain
    pub child_toward_from: PersonId,

    /// The pivot's neighbor on the "to" side of the chain
    pub child_toward_to: PersonId,

    /// Position of the pivot in `sequence`
    pub pivot_index: usize,

    /// Full node sequence from the "from" person to the "to" person
    pub sequence: Vec<PersonId>,

    /// The pivot's partner in the union containing either anchor, when found
    pub partner_id: Option<PersonId>,

    /// The partner's record, when the id resolves
    pub partner: Option<Person>,

    /// True when no branching ancestor exists and the geometric-midpoint
    /// policy picked the pivot instead
    pub midpoint_fallback: bool,
}

impl PivotResolution {
    /// Chain from the pivot down to the "from" person, pivot first.
    #[must_use]
    pub fn chain_toward_from(&self) -> Vec<PersonId> {
        self.sequence[..=self.pivot_index]
            .iter()
            .rev()
            .cloned()
            .collect()
    }

    /// Chain from the pivot down to the "to" person, pivot first.
    #[must_use]
    pub fn chain_toward_to(&self) -> Vec<PersonId> {
        self.sequence[self.pivot_index..].to_vec()
    }
}

/// Post-processes a found path into the common-ancestor structure diagram
/// renderers consume. Performs no drawing itself.
pub struct PivotResolver<'a> {
    registry: &'a PersonRegistry,
}

impl<'a> PivotResolver<'a> {
    pub fn new(registry: &'a PersonRegistry) -> Self {
        Self { registry }
    }

    /// Interpret `path` (as returned by `PathFinder::find_path` for the
    /// person `from`) and locate its pivot.
    ///
    /// The pivot is the first interior node of the chain where the step into
    /// it is parent-directed and the step out of it is child-directed — the
    /// point where ascent turns into descent. Chains with no such node
    /// (purely linear ascent or descent) fall back to the geometric midpoint,
    /// which is an explicit policy, not a claim of common ancestry.
    ///
    /// Returns `None` only when `from` itself doesn't resolve.
    pub fn resolve(&self, path: &[KinStep], from: &str) -> Option<PivotResolution> {
        let start = self.registry.resolve_id(from)?;

        let mut sequence: Vec<PersonId> = Vec::with_capacity(path.len() + 1);
        sequence.push(start);
        sequence.extend(path.iter().map(|s| s.to_id.clone()));

        let found = Self::branching_node(path, &sequence);

        let (pivot_index, midpoint_fallback) = match found {
            Some(index) => (index, false),
            None => ((sequence.len() - 1) / 2, true),
        };

        let pivot_id = sequence[pivot_index].clone();
        let child_toward_from = sequence[pivot_index.saturating_sub(1)].clone();
        let child_toward_to = sequence[(pivot_index + 1).min(sequence.len() - 1)].clone();

        let (partner_id, partner) =
            self.union_partner(&pivot_id, &child_toward_from, &child_toward_to);

        Some(PivotResolution {
            pivot_id,
            child_toward_from,
            child_toward_to,
            pivot_index,
            sequence,
            partner_id,
            partner,
            midpoint_fallback,
        })
    }

    /// First interior node where ascent turns into descent, if any.
    fn branching_node(path: &[KinStep], sequence: &[PersonId]) -> Option<usize> {
        for i in 1..sequence.len().saturating_sub(1) {
            let prev_step = &path[i - 1];
            let next_step = &path[i];

            // prev -> cur walks up to a parent: cur is a parent of prev
            let parent_of_prev = prev_step.kind.is_parent_directed()
                && prev_step.from_id == sequence[i - 1]
                && prev_step.to_id == sequence[i];

            // cur -> next walks down: explicitly as an "enfant" step, or the
            // next node's own step records cur as its parent
            let parent_of_next = (!next_step.kind.is_parent_directed()
                && next_step.from_id == sequence[i]
                && next_step.to_id == sequence[i + 1])
                || (next_step.kind.is_parent_directed()
                    && next_step.from_id == sequence[i + 1]
                    && next_step.to_id == sequence[i]);

            if parent_of_prev && parent_of_next {
                return Some(i);
            }
        }
        None
    }

    /// The pivot's partner in the union containing either anchor.
    fn union_partner(
        &self,
        pivot_id: &PersonId,
        child_toward_from: &PersonId,
        child_toward_to: &PersonId,
    ) -> (Option<PersonId>, Option<Person>) {
        let accessor = FamilyAccessor::new(self.registry);

        for union in accessor.unions_of(pivot_id.as_str()) {
            let contains_anchor = union
                .children
                .iter()
                .any(|c| c.id == *child_toward_from || c.id == *child_toward_to);
            if contains_anchor {
                return (union.partner_id, union.partner);
            }
        }

        (None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinship::path::PathFinder;

    fn registry() -> PersonRegistry {
        PersonRegistry::load_embedded().unwrap()
    }

    #[test]
    fn test_siblings_pivot_on_shared_father() {
        let registry = registry();
        let finder = PathFinder::new(&registry);
        let resolver = PivotResolver::new(&registry);

        let path = finder
            .find_path("daoud_said_000012", "halima_said_000013")
            .unwrap();
        let pivot = resolver.resolve(&path, "daoud_said_000012").unwrap();

        assert_eq!(pivot.pivot_id, PersonId::new("said_omar_000001"));
        assert_eq!(pivot.child_toward_from, PersonId::new("daoud_said_000012"));
        assert_eq!(pivot.child_toward_to, PersonId::new("halima_said_000013"));
        assert_eq!(pivot.pivot_index, 1);
        assert!(!pivot.midpoint_fallback);

        // Interior pivot: strictly between the two ends
        assert!(pivot.pivot_index > 0 && pivot.pivot_index < path.len());
    }

    #[test]
    fn test_sibling_pivot_partner_scans_union_order() {
        let registry = registry();
        let finder = PathFinder::new(&registry);
        let resolver = PivotResolver::new(&registry);

        // DAOUD's union (with FATIMA) sorts before HALIMA's unknown-mother
        // bucket, so the scan lands on FATIMA
        let path = finder
            .find_path("halima_said_000013", "daoud_said_000012")
            .unwrap();
        let pivot = resolver.resolve(&path, "halima_said_000013").unwrap();

        assert_eq!(pivot.pivot_id, PersonId::new("said_omar_000001"));
        assert_eq!(pivot.partner_id, Some(PersonId::new("fatima_abdou_000003")));
        assert_eq!(pivot.partner.unwrap().nom, "FATIMA");
    }

    #[test]
    fn test_cousins_pivot_and_partner() {
        let registry = registry();
        let finder = PathFinder::new(&registry);
        let resolver = PivotResolver::new(&registry);

        let path = finder
            .find_path("omar_issa_000020", "salim_hassan_000022")
            .unwrap();
        let pivot = resolver.resolve(&path, "omar_issa_000020").unwrap();

        // OMAR -> ISSA -> SAID -> AMINA -> SALIM branches at SAID
        assert_eq!(pivot.pivot_id, PersonId::new("said_omar_000001"));
        assert_eq!(pivot.pivot_index, 2);
        assert_eq!(pivot.child_toward_from, PersonId::new("issa_said_000010"));
        assert_eq!(pivot.child_toward_to, PersonId::new("amina_said_000011"));

        // Both anchors descend from the union with MOINA
        assert_eq!(pivot.partner_id, Some(PersonId::new("moina_ali_000002")));

        // Downward chains, pivot first
        assert_eq!(
            pivot.chain_toward_from(),
            vec![
                PersonId::new("said_omar_000001"),
                PersonId::new("issa_said_000010"),
                PersonId::new("omar_issa_000020"),
            ]
        );
        assert_eq!(
            pivot.chain_toward_to(),
            vec![
                PersonId::new("said_omar_000001"),
                PersonId::new("amina_said_000011"),
                PersonId::new("salim_hassan_000022"),
            ]
        );
    }

    #[test]
    fn test_linear_ascent_falls_back_to_midpoint() {
        let registry = registry();
        let finder = PathFinder::new(&registry);
        let resolver = PivotResolver::new(&registry);

        // Grandchild straight up to grandfather: no branching node
        let path = finder
            .find_path("omar_issa_000020", "said_omar_000001")
            .unwrap();
        assert_eq!(path.len(), 2);

        let pivot = resolver.resolve(&path, "omar_issa_000020").unwrap();
        assert!(pivot.midpoint_fallback);
        assert_eq!(pivot.pivot_id, PersonId::new("issa_said_000010"));
        assert_eq!(pivot.pivot_index, 1);
        assert_eq!(pivot.child_toward_from, PersonId::new("omar_issa_000020"));
        assert_eq!(pivot.child_toward_to, PersonId::new("said_omar_000001"));
    }

    #[test]
    fn test_empty_path_degenerates_to_self() {
        let registry = registry();
        let resolver = PivotResolver::new(&registry);

        let pivot = resolver.resolve(&[], "issa_said_000010").unwrap();
        assert!(pivot.midpoint_fallback);
        assert_eq!(pivot.pivot_index, 0);
        assert_eq!(pivot.pivot_id, PersonId::new("issa_said_000010"));
        assert_eq!(pivot.child_toward_from, pivot.pivot_id);
        assert_eq!(pivot.child_toward_to, pivot.pivot_id);
        assert_eq!(pivot.sequence.len(), 1);
    }

    #[test]
    fn test_unresolvable_from_is_none() {
        let registry = registry();
        let resolver = PivotResolver::new(&registry);
        assert!(resolver.resolve(&[], "nobody").is_none());
    }

    #[test]
    fn test_legacy_from_spelling_matches_canonical_steps() {
        let registry = registry();
        let finder = PathFinder::new(&registry);
        let resolver = PivotResolver::new(&registry);

        let path = finder
            .find_path("daoud_said_000012", "halima_said_000013")
            .unwrap();
        // The raw "from" is resolved before the sequence is rebuilt, so a
        // legacy spelling still lines up with the canonical step ids
        let pivot = resolver.resolve(&path, "p_daoud_said_000012").unwrap();
        assert_eq!(pivot.pivot_id, PersonId::new("said_omar_000001"));
        assert!(!pivot.midpoint_fallback);
    }
}
