// 🏗️ Input Parser - one pure function per field
//
// Nothing here touches stdin/stdout: each function takes the raw line the user
// typed and returns the typed value or an InputError the shell can report.

use crate::entities::{AnimalKind, Category};
use thiserror::Error;

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Incorrect choice: '{0}'")]
    InvalidMenuChoice(String),

    #[error("Wrong type of animal: '{0}'")]
    InvalidCategory(String),

    #[error("{field} must be a whole number, got '{value}'")]
    InvalidInteger { field: &'static str, value: String },

    #[error("{field} must be a number, got '{value}'")]
    InvalidFloat { field: &'static str, value: String },
}

// ============================================================================
// MENU
// ============================================================================

/// Top-level menu actions (1-5)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ListAll,
    FindByName,
    ShowByNumber,
    AddAnimal,
    Exit,
}

pub fn parse_menu_choice(raw: &str) -> Result<MenuChoice, InputError> {
    match raw.trim() {
        "1" => Ok(MenuChoice::ListAll),
        "2" => Ok(MenuChoice::FindByName),
        "3" => Ok(MenuChoice::ShowByNumber),
        "4" => Ok(MenuChoice::AddAnimal),
        "5" => Ok(MenuChoice::Exit),
        other => Err(InputError::InvalidMenuChoice(other.to_string())),
    }
}

/// Category from its menu number (1 = Mammal ... 5 = Amphibian)
pub fn parse_category(raw: &str) -> Result<Category, InputError> {
    raw.trim()
        .parse::<u32>()
        .ok()
        .and_then(Category::from_menu_number)
        .ok_or_else(|| InputError::InvalidCategory(raw.trim().to_string()))
}

// ============================================================================
// FIELDS
// ============================================================================

pub fn parse_int(field: &'static str, raw: &str) -> Result<i32, InputError> {
    raw.trim().parse().map_err(|_| InputError::InvalidInteger {
        field,
        value: raw.trim().to_string(),
    })
}

pub fn parse_float(field: &'static str, raw: &str) -> Result<f64, InputError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| InputError::InvalidFloat {
            field,
            value: raw.trim().to_string(),
        })
}

/// 1-based animal number → zero-based registry index
pub fn parse_position(raw: &str) -> Result<i64, InputError> {
    raw.trim()
        .parse::<i64>()
        .map(|number| number.saturating_sub(1))
        .map_err(|_| InputError::InvalidInteger {
            field: "Animal number",
            value: raw.trim().to_string(),
        })
}

/// "yes" / "y" (any case) is true, anything else is false
pub fn parse_yes_no(raw: &str) -> bool {
    matches!(raw.trim().to_lowercase().as_str(), "yes" | "y")
}

/// Prompt shown for the category-specific attribute
pub fn kind_prompt(category: Category) -> &'static str {
    match category {
        Category::Mammal => "Is there fur? (yes/no): ",
        Category::Bird => "Wingspan (in meters, eg 0.5): ",
        Category::Fish => "Water type (fresh/sea): ",
        Category::Reptile => "Venomous? (yes/no): ",
        Category::Amphibian => "Skin moisture (0 - dry to 10 - very moist): ",
    }
}

/// Category-specific attribute
///
/// Moisture is accepted as typed, including values outside 0-10.
pub fn parse_kind(category: Category, raw: &str) -> Result<AnimalKind, InputError> {
    let kind = match category {
        Category::Mammal => AnimalKind::Mammal {
            has_fur: parse_yes_no(raw),
        },
        Category::Bird => AnimalKind::Bird {
            wingspan: parse_float("Wingspan", raw)?,
        },
        Category::Fish => AnimalKind::Fish {
            water_type: raw.trim().to_string(),
        },
        Category::Reptile => AnimalKind::Reptile {
            is_venomous: parse_yes_no(raw),
        },
        Category::Amphibian => AnimalKind::Amphibian {
            skin_moisture: parse_int("Skin moisture", raw)?,
        },
    };
    Ok(kind)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_menu_choice() {
        assert_eq!(parse_menu_choice("1"), Ok(MenuChoice::ListAll));
        assert_eq!(parse_menu_choice(" 3\n"), Ok(MenuChoice::ShowByNumber));
        assert_eq!(parse_menu_choice("5"), Ok(MenuChoice::Exit));
        assert_eq!(
            parse_menu_choice("6"),
            Err(InputError::InvalidMenuChoice("6".to_string()))
        );
        assert!(parse_menu_choice("list").is_err());
    }

    #[test]
    fn test_parse_category() {
        assert_eq!(parse_category("1"), Ok(Category::Mammal));
        assert_eq!(parse_category("2"), Ok(Category::Bird));
        assert_eq!(parse_category("3"), Ok(Category::Fish));
        assert_eq!(parse_category("4"), Ok(Category::Reptile));
        assert_eq!(parse_category("5\n"), Ok(Category::Amphibian));
        assert_eq!(
            parse_category("0"),
            Err(InputError::InvalidCategory("0".to_string()))
        );
        assert!(parse_category("bird").is_err());
    }

    #[test]
    fn test_parse_int() {
        assert_eq!(parse_int("Age", "4"), Ok(4));
        assert_eq!(parse_int("Age", " -2 "), Ok(-2));
        assert_eq!(
            parse_int("Age", "four"),
            Err(InputError::InvalidInteger {
                field: "Age",
                value: "four".to_string()
            })
        );
        assert!(parse_int("Age", "4.5").is_err());
    }

    #[test]
    fn test_parse_float() {
        assert_eq!(parse_float("Weight", "30"), Ok(30.0));
        assert_eq!(parse_float("Weight", "0.5"), Ok(0.5));
        assert!(parse_float("Weight", "heavy").is_err());
        assert!(parse_float("Weight", "NaN").is_err());
        assert!(parse_float("Weight", "inf").is_err());
    }

    #[test]
    fn test_parse_position_is_zero_based() {
        assert_eq!(parse_position("1"), Ok(0));
        assert_eq!(parse_position("6"), Ok(5));
        assert_eq!(parse_position("0"), Ok(-1));
        assert!(parse_position("one").is_err());
    }

    #[test]
    fn test_parse_yes_no() {
        assert!(parse_yes_no("yes"));
        assert!(parse_yes_no("YES\n"));
        assert!(parse_yes_no("y"));
        assert!(!parse_yes_no("no"));
        assert!(!parse_yes_no(""));
        assert!(!parse_yes_no("maybe"));
    }

    #[test]
    fn test_parse_kind() {
        assert_eq!(
            parse_kind(Category::Mammal, "yes"),
            Ok(AnimalKind::Mammal { has_fur: true })
        );
        assert_eq!(
            parse_kind(Category::Bird, "1.2"),
            Ok(AnimalKind::Bird { wingspan: 1.2 })
        );
        assert_eq!(
            parse_kind(Category::Fish, " fresh \n"),
            Ok(AnimalKind::Fish { water_type: "fresh".to_string() })
        );
        assert_eq!(
            parse_kind(Category::Reptile, "no"),
            Ok(AnimalKind::Reptile { is_venomous: false })
        );
        assert_eq!(
            parse_kind(Category::Amphibian, "15"),
            Ok(AnimalKind::Amphibian { skin_moisture: 15 })
        );
        assert!(parse_kind(Category::Bird, "wide").is_err());
        assert!(parse_kind(Category::Amphibian, "damp").is_err());
    }
}
