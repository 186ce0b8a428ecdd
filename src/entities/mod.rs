// Entity Models
//
// An animal has:
// - Stable identity (UUID) assigned once
// - Shared attributes every category carries
// - One category-specific attribute (AnimalKind)

pub mod animal;

pub use animal::{Animal, AnimalKind, Category, MoistureLevel};
