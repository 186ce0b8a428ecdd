// 🐾 Animal Entity - shared attributes + one category-specific trait
//
// Every animal carries the same six attributes (name, age, habitat, food,
// weight, color). What makes a mammal a mammal lives in AnimalKind, a closed
// enum, so the description is a single match instead of five overrides.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// CATEGORY
// ============================================================================

/// The five animal categories, in menu order (1-5)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Mammal,
    Bird,
    Fish,
    Reptile,
    Amphibian,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Mammal,
        Category::Bird,
        Category::Fish,
        Category::Reptile,
        Category::Amphibian,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Mammal => "Mammal",
            Category::Bird => "Bird",
            Category::Fish => "Fish",
            Category::Reptile => "Reptile",
            Category::Amphibian => "Amphibian",
        }
    }

    /// Category for a 1-based menu number
    pub fn from_menu_number(number: u32) -> Option<Category> {
        match number {
            1..=5 => Some(Self::ALL[(number - 1) as usize]),
            _ => None,
        }
    }
}

// ============================================================================
// SKIN MOISTURE
// ============================================================================

/// Bucketed skin moisture for amphibians
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoistureLevel {
    Dry,
    Normal,
    Wet,
}

impl MoistureLevel {
    /// < 3 is dry, 3..7 is normal, 7 and above is wet.
    /// Values outside 0-10 fall into the nearest bucket.
    pub fn from_value(value: i32) -> Self {
        if value < 3 {
            MoistureLevel::Dry
        } else if value < 7 {
            MoistureLevel::Normal
        } else {
            MoistureLevel::Wet
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MoistureLevel::Dry => "dry",
            MoistureLevel::Normal => "normal",
            MoistureLevel::Wet => "wet",
        }
    }
}

// ============================================================================
// ANIMAL KIND
// ============================================================================

/// The category-specific part of an animal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AnimalKind {
    Mammal { has_fur: bool },

    /// Wingspan in meters
    Bird { wingspan: f64 },

    /// "fresh" or "sea" in practice, not validated
    Fish { water_type: String },

    Reptile { is_venomous: bool },

    /// 0 (dry) to 10 (very wet), advisory only
    Amphibian { skin_moisture: i32 },
}

impl AnimalKind {
    pub fn category(&self) -> Category {
        match self {
            AnimalKind::Mammal { .. } => Category::Mammal,
            AnimalKind::Bird { .. } => Category::Bird,
            AnimalKind::Fish { .. } => Category::Fish,
            AnimalKind::Reptile { .. } => Category::Reptile,
            AnimalKind::Amphibian { .. } => Category::Amphibian,
        }
    }

    /// Clause appended after the type tag
    fn clause(&self) -> String {
        match self {
            AnimalKind::Mammal { has_fur } => {
                let fur = if *has_fur { "has fur" } else { "no fur" };
                fur.to_string()
            }
            AnimalKind::Bird { wingspan } => format!("Wingspan: {} m", wingspan),
            AnimalKind::Fish { water_type } => format!("Water: {}", water_type),
            AnimalKind::Reptile { is_venomous } => {
                let venom = if *is_venomous { "venomous" } else { "non-venomous" };
                venom.to_string()
            }
            AnimalKind::Amphibian { skin_moisture } => format!(
                "Skin: {} (level {}/10)",
                MoistureLevel::from_value(*skin_moisture).as_str(),
                skin_moisture
            ),
        }
    }
}

// ============================================================================
// ANIMAL ENTITY
// ============================================================================

/// One animal record
///
/// Identity: `id` + `added_at`, assigned once at construction.
/// Values: the shared attributes plus `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Animal {
    /// Stable identity (UUID)
    pub id: String,

    /// When the record entered the registry
    pub added_at: DateTime<Utc>,

    pub name: String,

    /// Age in years
    pub age: i32,

    /// Where it lives (forest, water, desert...)
    pub habitat: String,

    /// What it eats (carnivore, herbivore, omnivore...)
    pub food_type: String,

    /// Weight in kilograms
    pub weight: f64,

    pub color: String,

    pub kind: AnimalKind,
}

impl Animal {
    /// Create new animal with a fresh UUID
    pub fn new(
        name: impl Into<String>,
        age: i32,
        habitat: impl Into<String>,
        food_type: impl Into<String>,
        weight: f64,
        color: impl Into<String>,
        kind: AnimalKind,
    ) -> Self {
        Animal {
            id: uuid::Uuid::new_v4().to_string(),
            added_at: Utc::now(),
            name: name.into(),
            age,
            habitat: habitat.into(),
            food_type: food_type.into(),
            weight,
            color: color.into(),
            kind,
        }
    }

    pub fn category(&self) -> Category {
        self.kind.category()
    }

    /// Case-insensitive substring match on the name
    pub fn name_matches(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase())
    }

    /// Shared attributes in fixed order
    fn base_description(&self) -> String {
        format!(
            "Name: {}, Age: {} years, Habitat: {}, Food: {}, Weight: {} kg, Color: {}",
            self.name, self.age, self.habitat, self.food_type, self.weight, self.color
        )
    }

    /// Human-readable summary: shared attributes, then type tag and clause
    pub fn describe(&self) -> String {
        format!(
            "{}, Type: {}, {}",
            self.base_description(),
            self.category().as_str(),
            self.kind.clause()
        )
    }
}

impl fmt::Display for Animal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn amphibian(moisture: i32) -> Animal {
        Animal::new(
            "Croaky",
            2,
            "swamp",
            "insects",
            0.3,
            "green",
            AnimalKind::Amphibian { skin_moisture: moisture },
        )
    }

    #[test]
    fn test_animal_creation() {
        let animal = Animal::new(
            "Leo",
            5,
            "savanna",
            "carnivore",
            150.0,
            "golden",
            AnimalKind::Mammal { has_fur: true },
        );

        assert!(!animal.id.is_empty());
        assert_eq!(animal.name, "Leo");
        assert_eq!(animal.age, 5);
        assert_eq!(animal.category(), Category::Mammal);
    }

    #[test]
    fn test_unique_ids() {
        let a = amphibian(5);
        let b = amphibian(5);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_mammal_description() {
        let leo = Animal::new(
            "Leo",
            5,
            "savanna",
            "carnivore",
            150.0,
            "golden",
            AnimalKind::Mammal { has_fur: true },
        );
        assert_eq!(
            leo.describe(),
            "Name: Leo, Age: 5 years, Habitat: savanna, Food: carnivore, \
             Weight: 150 kg, Color: golden, Type: Mammal, has fur"
        );

        let bald = Animal::new(
            "Mole",
            1,
            "burrow",
            "insects",
            0.1,
            "pink",
            AnimalKind::Mammal { has_fur: false },
        );
        assert!(bald.describe().ends_with("Type: Mammal, no fur"));
    }

    #[test]
    fn test_bird_description() {
        let bird = Animal::new(
            "Kesha",
            2,
            "forest",
            "omnivore",
            0.5,
            "motley",
            AnimalKind::Bird { wingspan: 0.3 },
        );
        assert_eq!(
            bird.describe(),
            "Name: Kesha, Age: 2 years, Habitat: forest, Food: omnivore, \
             Weight: 0.5 kg, Color: motley, Type: Bird, Wingspan: 0.3 m"
        );
    }

    #[test]
    fn test_fish_description() {
        let fish = Animal::new(
            "Nemo",
            1,
            "ocean",
            "carnivore",
            0.1,
            "orange",
            AnimalKind::Fish { water_type: "sea".to_string() },
        );
        assert!(fish.describe().ends_with("Type: Fish, Water: sea"));
    }

    #[test]
    fn test_reptile_description() {
        let snake = Animal::new(
            "Snakey",
            3,
            "desert",
            "carnivore",
            2.0,
            "green",
            AnimalKind::Reptile { is_venomous: true },
        );
        assert!(snake.describe().ends_with("Type: Reptile, venomous"));
        assert!(snake.describe().contains("Weight: 2 kg"));

        let turtle = Animal::new(
            "Tortilla",
            40,
            "pond",
            "herbivore",
            12.5,
            "brown",
            AnimalKind::Reptile { is_venomous: false },
        );
        assert!(turtle.describe().ends_with("Type: Reptile, non-venomous"));
    }

    #[test]
    fn test_amphibian_description() {
        assert_eq!(
            amphibian(8).describe(),
            "Name: Croaky, Age: 2 years, Habitat: swamp, Food: insects, \
             Weight: 0.3 kg, Color: green, Type: Amphibian, Skin: wet (level 8/10)"
        );
    }

    #[test]
    fn test_moisture_buckets() {
        assert_eq!(MoistureLevel::from_value(0), MoistureLevel::Dry);
        assert_eq!(MoistureLevel::from_value(2), MoistureLevel::Dry);
        assert_eq!(MoistureLevel::from_value(3), MoistureLevel::Normal);
        assert_eq!(MoistureLevel::from_value(6), MoistureLevel::Normal);
        assert_eq!(MoistureLevel::from_value(7), MoistureLevel::Wet);
        assert_eq!(MoistureLevel::from_value(10), MoistureLevel::Wet);

        assert!(amphibian(2).describe().contains("Skin: dry (level 2/10)"));
        assert!(amphibian(3).describe().contains("Skin: normal (level 3/10)"));
    }

    #[test]
    fn test_moisture_out_of_range_is_kept() {
        // Stored as-is; only the label is bucketed
        assert!(amphibian(-4).describe().contains("Skin: dry (level -4/10)"));
        assert!(amphibian(42).describe().contains("Skin: wet (level 42/10)"));
    }

    #[test]
    fn test_name_matches() {
        let animal = amphibian(5);
        assert!(animal.name_matches("croaky"));
        assert!(animal.name_matches("CROAK"));
        assert!(animal.name_matches("oak"));
        assert!(!animal.name_matches("frog"));
    }

    #[test]
    fn test_category_menu_numbers() {
        assert_eq!(Category::from_menu_number(1), Some(Category::Mammal));
        assert_eq!(Category::from_menu_number(5), Some(Category::Amphibian));
        assert_eq!(Category::from_menu_number(0), None);
        assert_eq!(Category::from_menu_number(6), None);
    }

    #[test]
    fn test_display_matches_describe() {
        let animal = amphibian(5);
        assert_eq!(animal.to_string(), animal.describe());
    }
}
