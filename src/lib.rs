// Zoo Registry - Core Library
// Exposes the record model, registry and shell for the CLI and tests

pub mod entities;
pub mod parser;
pub mod registry;
pub mod shell;

// Re-export commonly used types
pub use entities::{Animal, AnimalKind, Category, MoistureLevel};
pub use parser::{
    parse_category, parse_float, parse_int, parse_kind, parse_menu_choice, parse_position,
    parse_yes_no, InputError, MenuChoice,
};
pub use registry::{ListedAnimal, Listing, RegistryError, ZooRegistry};
pub use shell::Shell;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
