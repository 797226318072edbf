use std::cmp::Ordering;
use std::collections::HashMap;

use serde::Serialize;

use crate::core::person::Person;
use crate::core::types::PersonId;
use crate::registry::store::PersonRegistry;

/// A derived family unit: one partner of the person plus the children the
/// two share. Never stored; grouped on demand from the flat records.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Union {
    /// The other parent's id; `None` for the unknown-partner bucket
    pub partner_id: Option<PersonId>,

    /// The other parent's record; `None` when the partner is unknown or the
    /// recorded id doesn't resolve
    pub partner: Option<Person>,

    /// Shared children, sorted by display name
    pub children: Vec<Person>,
}

/// Direct relatives of a person, as consumed by diagram renderers.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Relatives {
    pub person: Person,
    pub father: Option<Person>,
    pub mother: Option<Person>,
    pub children: Vec<Person>,
    pub unions: Vec<Union>,
}

/// Read-only accessor deriving parents, children, twin, and unions from the
/// registry. All lookups resolve their input identifier first; an
/// unresolvable identifier yields empty results, never an error.
pub struct FamilyAccessor<'a> {
    registry: &'a PersonRegistry,
}

impl<'a> FamilyAccessor<'a> {
    pub fn new(registry: &'a PersonRegistry) -> Self {
        Self { registry }
    }

    /// The person's father, when recorded and resolvable
    pub fn father(&self, input: &str) -> Option<&'a Person> {
        let person = self.registry.resolve(input)?;
        self.registry.get(person.pere_id.as_ref()?)
    }

    /// The person's mother, when recorded and resolvable
    pub fn mother(&self, input: &str) -> Option<&'a Person> {
        let person = self.registry.resolve(input)?;
        self.registry.get(person.mere_id.as_ref()?)
    }

    /// The person's twin, when recorded and resolvable
    pub fn twin(&self, input: &str) -> Option<&'a Person> {
        let person = self.registry.resolve(input)?;
        self.registry.get(person.jumeau_id.as_ref()?)
    }

    /// All children of the person (as father or mother), sorted by
    /// display name.
    pub fn children_of(&self, input: &str) -> Vec<Person> {
        let Some(id) = self.registry.resolve_id(input) else {
            return Vec::new();
        };

        let mut children: Vec<Person> = self
            .registry
            .children_indices(&id)
            .iter()
            .filter_map(|&idx| self.registry.by_index(idx).cloned())
            .collect();

        children.sort_by(|a, b| a.display_name().cmp(&b.display_name()));
        children
    }

    /// Children grouped by the other parent.
    ///
    /// Each child of the person lands in exactly one group, keyed by the
    /// complementary parent id (the partner), or in the unknown-partner
    /// bucket when that side is unrecorded. Groups are sorted by partner
    /// display name; unknown/unresolvable partners sort last.
    pub fn unions_of(&self, input: &str) -> Vec<Union> {
        let Some(id) = self.registry.resolve_id(input) else {
            return Vec::new();
        };

        let mut groups: HashMap<Option<PersonId>, Vec<Person>> = HashMap::new();
        let mut group_order: Vec<Option<PersonId>> = Vec::new();

        for &idx in self.registry.children_indices(&id) {
            let Some(child) = self.registry.by_index(idx) else {
                continue;
            };

            // The partner is whichever parent slot doesn't name this person
            let partner_key = if child.pere_id.as_ref() == Some(&id) {
                child.mere_id.clone()
            } else {
                child.pere_id.clone()
            };

            if !groups.contains_key(&partner_key) {
                group_order.push(partner_key.clone());
            }
            groups.entry(partner_key).or_default().push(child.clone());
        }

        let mut unions: Vec<Union> = group_order
            .into_iter()
            .map(|partner_id| {
                let mut children = groups.remove(&partner_id).unwrap_or_default();
                children.sort_by(|a, b| a.display_name().cmp(&b.display_name()));

                let partner = partner_id
                    .as_ref()
                    .and_then(|pid| self.registry.get(pid))
                    .cloned();

                Union {
                    partner_id,
                    partner,
                    children,
                }
            })
            .collect();

        unions.sort_by(|a, b| {
            let name_a = a.partner.as_ref().map(Person::display_name);
            let name_b = b.partner.as_ref().map(Person::display_name);
            match (name_a, name_b) {
                (Some(x), Some(y)) => x.cmp(&y).then_with(|| a.partner_id.cmp(&b.partner_id)),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => a.partner_id.cmp(&b.partner_id),
            }
        });

        unions
    }

    /// The combined father/mother/children/unions structure for a person.
    pub fn relatives(&self, input: &str) -> Option<Relatives> {
        let person = self.registry.resolve(input)?.clone();

        let father = self.father(person.id.as_str()).cloned();
        let mother = self.mother(person.id.as_str()).cloned();
        let children = self.children_of(person.id.as_str());
        let unions = self.unions_of(person.id.as_str());

        Some(Relatives {
            person,
            father,
            mother,
            children,
            unions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> PersonRegistry {
        PersonRegistry::load_embedded().unwrap()
    }

    #[test]
    fn test_father_and_mother() {
        let registry = registry();
        let accessor = FamilyAccessor::new(&registry);

        let father = accessor.father("issa_said_000010").unwrap();
        assert_eq!(father.id, PersonId::new("said_omar_000001"));

        let mother = accessor.mother("issa_said_000010").unwrap();
        assert_eq!(mother.id, PersonId::new("moina_ali_000002"));

        // Patriarch has no recorded parents
        assert!(accessor.father("said_omar_000001").is_none());
        assert!(accessor.mother("said_omar_000001").is_none());
    }

    #[test]
    fn test_father_tolerates_legacy_input() {
        let registry = registry();
        let accessor = FamilyAccessor::new(&registry);

        let father = accessor.father("p_issa_said_000010").unwrap();
        assert_eq!(father.id, PersonId::new("said_omar_000001"));
    }

    #[test]
    fn test_twin() {
        let registry = registry();
        let accessor = FamilyAccessor::new(&registry);

        let twin = accessor.twin("omar_issa_000020").unwrap();
        assert_eq!(twin.id, PersonId::new("nadia_issa_000021"));

        assert!(accessor.twin("issa_said_000010").is_none());
    }

    #[test]
    fn test_children_sorted_by_display_name() {
        let registry = registry();
        let accessor = FamilyAccessor::new(&registry);

        let children = accessor.children_of("said_omar_000001");
        let noms: Vec<&str> = children.iter().map(|c| c.nom.as_str()).collect();
        assert_eq!(noms, vec!["AMINA", "DAOUD", "HALIMA", "ISSA"]);
    }

    #[test]
    fn test_children_of_mother() {
        let registry = registry();
        let accessor = FamilyAccessor::new(&registry);

        let children = accessor.children_of("zalia_youssouf_000004");
        let noms: Vec<&str> = children.iter().map(|c| c.nom.as_str()).collect();
        assert_eq!(noms, vec!["NADIA", "OMAR"]);
    }

    #[test]
    fn test_unions_group_and_order() {
        let registry = registry();
        let accessor = FamilyAccessor::new(&registry);

        let unions = accessor.unions_of("said_omar_000001");
        assert_eq!(unions.len(), 3);

        // Sorted by partner display name: FATIMA ABDOU < MOINA ALI,
        // unknown-partner bucket last
        assert_eq!(
            unions[0].partner_id,
            Some(PersonId::new("fatima_abdou_000003"))
        );
        assert_eq!(unions[1].partner_id, Some(PersonId::new("moina_ali_000002")));
        assert_eq!(unions[2].partner_id, None);
        assert!(unions[2].partner.is_none());

        let moina_kids: Vec<&str> = unions[1].children.iter().map(|c| c.nom.as_str()).collect();
        assert_eq!(moina_kids, vec!["AMINA", "ISSA"]);

        let unknown_kids: Vec<&str> = unions[2].children.iter().map(|c| c.nom.as_str()).collect();
        assert_eq!(unknown_kids, vec!["HALIMA"]);
    }

    #[test]
    fn test_unions_partition_children() {
        let registry = registry();
        let accessor = FamilyAccessor::new(&registry);

        for person in &registry.persons {
            let children = accessor.children_of(person.id.as_str());
            let unions = accessor.unions_of(person.id.as_str());

            let mut grouped: Vec<PersonId> = unions
                .iter()
                .flat_map(|u| u.children.iter().map(|c| c.id.clone()))
                .collect();
            let mut expected: Vec<PersonId> = children.iter().map(|c| c.id.clone()).collect();

            grouped.sort();
            expected.sort();
            assert_eq!(grouped, expected, "unions must partition children_of");
        }
    }

    #[test]
    fn test_unions_of_mother() {
        let registry = registry();
        let accessor = FamilyAccessor::new(&registry);

        // AMINA's children with HASSAN: the partner is taken from the pereId side
        let unions = accessor.unions_of("amina_said_000011");
        assert_eq!(unions.len(), 1);
        assert_eq!(
            unions[0].partner_id,
            Some(PersonId::new("hassan_moussa_000005"))
        );
        assert_eq!(unions[0].children.len(), 1);
        assert_eq!(unions[0].children[0].nom, "SALIM");
    }

    #[test]
    fn test_unresolvable_yields_empty() {
        let registry = registry();
        let accessor = FamilyAccessor::new(&registry);

        assert!(accessor.father("nobody").is_none());
        assert!(accessor.children_of("nobody").is_empty());
        assert!(accessor.unions_of("nobody").is_empty());
        assert!(accessor.relatives("nobody").is_none());
    }

    #[test]
    fn test_relatives_structure() {
        let registry = registry();
        let accessor = FamilyAccessor::new(&registry);

        let relatives = accessor.relatives("issa_said_000010").unwrap();
        assert_eq!(relatives.person.nom, "ISSA");
        assert_eq!(relatives.father.unwrap().nom, "SAID");
        assert_eq!(relatives.mother.unwrap().nom, "MOINA");
        assert_eq!(relatives.children.len(), 2);
        assert_eq!(relatives.unions.len(), 1);
        assert_eq!(
            relatives.unions[0].partner_id,
            Some(PersonId::new("zalia_youssouf_000004"))
        );
    }
}
