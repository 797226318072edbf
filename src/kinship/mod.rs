//! Kinship queries over the implicit family graph.
//!
//! Three layers, each read-only over the registry:
//!
//! - [`FamilyAccessor`]: direct relatives — parents, children, twin, and the
//!   derived union (partner + shared children) groups
//! - [`PathFinder`]: shortest relationship chain between two people, via
//!   breadth-first search over parent/child edges walked in either direction
//! - [`PivotResolver`]: reinterprets a found chain as "common ancestor + two
//!   downward branches + the ancestor's partner" for diagram rendering
//!
//! ## Example
//!
//! ```rust,no_run
//! use lignage::{FamilyAccessor, PathFinder, PersonRegistry, PivotResolver};
//!
//! let registry = PersonRegistry::load_embedded().unwrap();
//!
//! let accessor = FamilyAccessor::new(&registry);
//! let relatives = accessor.relatives("issa_said_000010");
//!
//! let finder = PathFinder::new(&registry);
//! if let Some(path) = finder.find_path("omar_issa_000020", "salim_hassan_000022") {
//!     let resolver = PivotResolver::new(&registry);
//!     let pivot = resolver.resolve(&path, "omar_issa_000020");
//! }
//! ```

pub mod path;
pub mod pivot;
pub mod relations;

pub use path::{KinStep, PathFinder};
pub use pivot::{PivotResolution, PivotResolver};
pub use relations::{FamilyAccessor, Relatives, Union};
