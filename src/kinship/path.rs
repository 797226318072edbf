use std::collections::{HashMap, HashSet, VecDeque};

use serde::Serialize;

use crate::core::types::{PersonId, StepKind};
use crate::registry::store::PersonRegistry;

/// One edge traversal in a kinship chain: `kind` describes the relationship
/// of `to` as seen from `from` (their father, their mother, or one of their
/// children).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KinStep {
    pub from_id: PersonId,
    pub to_id: PersonId,
    #[serde(rename = "type")]
    pub kind: StepKind,
}

/// Breadth-first shortest-chain search over the implicit parent/child graph.
///
/// Traversal is direction-agnostic: from any node one can walk up to a
/// parent or down to a child, which guarantees BFS finds the minimum number
/// of parent/child steps, not merely a path following ancestry one way.
pub struct PathFinder<'a> {
    registry: &'a PersonRegistry,
}

impl<'a> PathFinder<'a> {
    pub fn new(registry: &'a PersonRegistry) -> Self {
        Self { registry }
    }

    /// Find the shortest kinship chain between two people.
    ///
    /// Returns `Some(vec![])` when both inputs resolve to the same person,
    /// and `None` when either input fails to resolve *or* no connecting
    /// chain exists — the two conditions are deliberately indistinguishable
    /// here; callers who care pre-check `resolve`.
    ///
    /// Ties among equally short chains are broken by traversal order:
    /// father before mother before children (children in dataset order),
    /// which makes the result deterministic without claiming any semantic
    /// preference among equally short paths.
    pub fn find_path(&self, from: &str, to: &str) -> Option<Vec<KinStep>> {
        let start = self.registry.resolve_id(from)?;
        let goal = self.registry.resolve_id(to)?;

        if start == goal {
            return Some(Vec::new());
        }

        let mut queue: VecDeque<PersonId> = VecDeque::new();
        let mut visited: HashSet<PersonId> = HashSet::new();
        let mut prev: HashMap<PersonId, KinStep> = HashMap::new();

        queue.push_back(start.clone());
        visited.insert(start.clone());

        while let Some(current) = queue.pop_front() {
            for step in self.neighbors(&current) {
                if visited.contains(&step.to_id) {
                    continue;
                }
                visited.insert(step.to_id.clone());

                let reached_goal = step.to_id == goal;
                let next = step.to_id.clone();
                prev.insert(next.clone(), step);

                if reached_goal {
                    return Some(Self::reconstruct(&prev, &start, &goal));
                }

                queue.push_back(next);
            }
        }

        None
    }

    /// Enumerate the edges out of a node: father, mother, then children.
    fn neighbors(&self, id: &PersonId) -> Vec<KinStep> {
        let mut out = Vec::new();

        let Some(person) = self.registry.get(id) else {
            return out;
        };

        if let Some(pere_id) = &person.pere_id {
            out.push(KinStep {
                from_id: id.clone(),
                to_id: pere_id.clone(),
                kind: StepKind::Pere,
            });
        }

        if let Some(mere_id) = &person.mere_id {
            out.push(KinStep {
                from_id: id.clone(),
                to_id: mere_id.clone(),
                kind: StepKind::Mere,
            });
        }

        for &idx in self.registry.children_indices(id) {
            if let Some(child) = self.registry.by_index(idx) {
                out.push(KinStep {
                    from_id: id.clone(),
                    to_id: child.id.clone(),
                    kind: StepKind::Enfant,
                });
            }
        }

        out
    }

    /// Walk the back-pointers from the goal to the start and reverse.
    fn reconstruct(
        prev: &HashMap<PersonId, KinStep>,
        start: &PersonId,
        goal: &PersonId,
    ) -> Vec<KinStep> {
        let mut steps = Vec::new();
        let mut cursor = goal.clone();

        while cursor != *start {
            let Some(step) = prev.get(&cursor) else {
                break;
            };
            cursor = step.from_id.clone();
            steps.push(step.clone());
        }

        steps.reverse();
        steps
    }
}
