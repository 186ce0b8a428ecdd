// 🦁 Zoo Registry - ordered, append-only store of every animal
//
// Built explicitly by the caller (no global instance): `new()` for an empty
// zoo, `with_sample_animals()` for the five sample residents.

use crate::entities::{Animal, AnimalKind, Category};
use serde::Serialize;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use thiserror::Error;
use tracing::{debug, info};

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Invalid animal number: index {index} is outside 0..{count}")]
    InvalidIndex { index: i64, count: usize },
}

// ============================================================================
// LISTING
// ============================================================================

/// One line of a listing: 1-based position + description
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListedAnimal {
    pub position: usize,
    pub description: String,
}

/// Result of `list_all`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Listing {
    /// No animals in the zoo yet
    Empty,
    Records(Vec<ListedAnimal>),
}

impl Listing {
    pub fn total(&self) -> usize {
        match self {
            Listing::Empty => 0,
            Listing::Records(records) => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Listing::Empty)
    }
}

// ============================================================================
// ZOO REGISTRY
// ============================================================================

/// Registry of all animals in the zoo, in insertion order
pub struct ZooRegistry {
    /// Append-only; nothing is ever removed
    animals: Arc<RwLock<Vec<Animal>>>,
}

impl ZooRegistry {
    /// Create new empty registry
    pub fn new() -> Self {
        ZooRegistry {
            animals: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Create registry with one sample animal per category
    pub fn with_sample_animals() -> Self {
        let registry = ZooRegistry::new();
        registry.register_sample_animals();
        registry
    }

    fn register_sample_animals(&self) {
        let samples = [
            Animal::new(
                "Leo",
                5,
                "savanna",
                "carnivore",
                150.0,
                "golden",
                AnimalKind::Mammal { has_fur: true },
            ),
            Animal::new(
                "Kesha",
                2,
                "forest",
                "omnivore",
                0.5,
                "motley",
                AnimalKind::Bird { wingspan: 0.3 },
            ),
            Animal::new(
                "Nemo",
                1,
                "ocean",
                "carnivore",
                0.1,
                "orange",
                AnimalKind::Fish { water_type: "sea".to_string() },
            ),
            Animal::new(
                "Snakey",
                3,
                "desert",
                "carnivore",
                2.0,
                "green",
                AnimalKind::Reptile { is_venomous: true },
            ),
            Animal::new(
                "Croaky",
                2,
                "swamp",
                "insects",
                0.3,
                "green",
                AnimalKind::Amphibian { skin_moisture: 8 },
            ),
        ];

        let mut animals = self.write();
        animals.extend(samples);
        info!(count = animals.len(), "Registered sample animals");
    }

    // The vector is only ever pushed to, so a poisoned lock still
    // guards a consistent list.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Animal>> {
        self.animals.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Animal>> {
        self.animals.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Add an animal to the end of the zoo; returns the stored record
    pub fn append(&self, animal: Animal) -> Animal {
        info!(
            name = %animal.name,
            category = animal.category().as_str(),
            "Animal added to the zoo"
        );
        self.write().push(animal.clone());
        animal
    }

    /// Every animal's description, 1-indexed, in insertion order
    pub fn list_all(&self) -> Listing {
        let animals = self.read();
        if animals.is_empty() {
            return Listing::Empty;
        }

        Listing::Records(
            animals
                .iter()
                .enumerate()
                .map(|(i, animal)| ListedAnimal {
                    position: i + 1,
                    description: animal.describe(),
                })
                .collect(),
        )
    }

    /// All animals whose name contains `query` (case-insensitive)
    ///
    /// An empty result means "not found".
    pub fn find_by_name(&self, query: &str) -> Vec<Animal> {
        let matches: Vec<Animal> = self
            .read()
            .iter()
            .filter(|animal| animal.name_matches(query))
            .cloned()
            .collect();
        debug!(query, matches = matches.len(), "Searched animals by name");
        matches
    }

    /// Animal at a zero-based position
    pub fn get_by_position(&self, index: i64) -> Result<Animal, RegistryError> {
        let animals = self.read();
        let count = animals.len();

        usize::try_from(index)
            .ok()
            .and_then(|i| animals.get(i))
            .cloned()
            .ok_or_else(|| {
                debug!(index, count, "Rejected out-of-range animal index");
                RegistryError::InvalidIndex { index, count }
            })
    }

    /// Get all animals (clones, insertion order)
    pub fn all_animals(&self) -> Vec<Animal> {
        self.read().clone()
    }

    /// Count animals
    pub fn count(&self) -> usize {
        self.read().len()
    }

    /// Get animals by category
    pub fn by_category(&self, category: Category) -> Vec<Animal> {
        self.read()
            .iter()
            .filter(|a| a.category() == category)
            .cloned()
            .collect()
    }
}

impl Default for ZooRegistry {
    fn default() -> Self {
        Self::with_sample_animals()
    }
}

// ============================================================================
// TESTS
// ============================================================================
