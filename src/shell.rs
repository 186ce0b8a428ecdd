// 🖥️ Zoo Shell - numbered text menu over any reader/writer
//
// main.rs hands it stdin/stdout; tests hand it a Cursor and a Vec<u8>.

use crate::entities::{Animal, Category};
use crate::parser::{
    kind_prompt, parse_category, parse_float, parse_int, parse_kind, parse_menu_choice,
    parse_position, InputError, MenuChoice,
};
use crate::registry::{Listing, ZooRegistry};
use anyhow::Result;
use std::io::{self, BufRead, Write};
use thiserror::Error;
use tracing::{debug, warn};

const MENU: &str = "\nZOO MANAGEMENT MENU:\n\
                    1. Show all animals\n\
                    2. Find an animal by name\n\
                    3. Show an animal by number\n\
                    4. Add a new animal\n\
                    5. Exit\n";

pub struct Shell<'a, R, W> {
    registry: &'a ZooRegistry,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(registry: &'a ZooRegistry, input: R, output: W) -> Self {
        Shell {
            registry,
            input,
            output,
        }
    }

    /// Run the menu loop until "Exit" or end of input
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "WELCOME TO THE ELECTRONIC ZOO!")?;

        loop {
            write!(self.output, "{}\nSelect an action (1-5): ", MENU)?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                debug!("Input closed, leaving the shell");
                break;
            };

            match parse_menu_choice(&line) {
                Ok(MenuChoice::ListAll) => self.show_all()?,
                Ok(MenuChoice::FindByName) => self.find_by_name()?,
                Ok(MenuChoice::ShowByNumber) => self.show_by_number()?,
                Ok(MenuChoice::AddAnimal) => self.add_animal()?,
                Ok(MenuChoice::Exit) => {
                    writeln!(self.output, "Goodbye! Come to the zoo again!")?;
                    break;
                }
                Err(err) => {
                    debug!(%err, "Rejected menu choice");
                    writeln!(self.output, "Incorrect choice. Try again.")?;
                }
            }
        }

        Ok(())
    }

    /// Next line without its line ending, `None` at end of input.
    /// Bytes that are not UTF-8 become U+FFFD instead of failing the read.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Prompt inside the add-animal form, where end of input aborts the form
    fn ask(&mut self, text: &str) -> Result<String, FormError> {
        self.prompt(text)?.ok_or(FormError::Closed)
    }

    fn show_all(&mut self) -> Result<()> {
        match self.registry.list_all() {
            Listing::Empty => writeln!(self.output, "There are no animals in the zoo yet.")?,
            Listing::Records(records) => {
                writeln!(self.output, "\n========== OUR ZOO ==========")?;
                for record in &records {
                    writeln!(self.output, "\n--- Animal #{} ---", record.position)?;
                    writeln!(self.output, "{}", record.description)?;
                }
                writeln!(self.output, "\nTotal animals: {}", records.len())?;
            }
        }
        Ok(())
    }

    fn find_by_name(&mut self) -> Result<()> {
        let Some(query) = self.prompt("Enter the name of the animal to search: ")? else {
            return Ok(());
        };

        let found = self.registry.find_by_name(&query);
        if found.is_empty() {
            writeln!(self.output, "No animal with this name was found.")?;
        }
        for animal in found {
            writeln!(self.output, "\nAnimal found:\n{}", animal)?;
        }
        Ok(())
    }

    fn show_by_number(&mut self) -> Result<()> {
        let Some(raw) = self.prompt("Enter animal number (1, 2, 3...): ")? else {
            return Ok(());
        };

        let index = match parse_position(&raw) {
            Ok(index) => index,
            Err(_) => {
                writeln!(self.output, "Enter a number!")?;
                return Ok(());
            }
        };

        match self.registry.get_by_position(index) {
            Ok(animal) => writeln!(self.output, "\nAnimal #{}:\n{}", index + 1, animal)?,
            Err(err) => {
                debug!(%err, "Lookup by number failed");
                writeln!(self.output, "Invalid animal number")?;
            }
        }
        Ok(())
    }

    fn add_animal(&mut self) -> Result<()> {
        writeln!(self.output, "\nADDING A NEW ANIMAL\nSelect animal type:")?;
        for (i, category) in Category::ALL.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, category.as_str())?;
        }

        match self.read_animal() {
            Ok(animal) => {
                let stored = self.registry.append(animal);
                writeln!(self.output, "Animal {} successfully added to the zoo!", stored.name)?;
            }
            Err(FormError::Invalid(InputError::InvalidCategory(raw))) => {
                debug!(%raw, "Rejected animal type");
                writeln!(self.output, "Wrong type of animal")?;
            }
            Err(FormError::Invalid(err)) => {
                warn!(%err, "Animal not added");
                writeln!(self.output, "{}. Animal not added.", err)?;
            }
            Err(FormError::Closed) => debug!("Input closed while adding an animal"),
            Err(FormError::Io(err)) => return Err(err.into()),
        }
        Ok(())
    }

    /// Ask for every field in order; stops at the first invalid number
    fn read_animal(&mut self) -> Result<Animal, FormError> {
        let category = parse_category(&self.ask("Your choice (1-5): ")?)?;
        let name = self.ask("Nickname: ")?.trim().to_string();
        let age = parse_int("Age", &self.ask("Age (years): ")?)?;
        let habitat = self.ask("Habitat (forest, water, desert, etc.): ")?.trim().to_string();
        let food_type = self
            .ask("Diet type (carnivore, herbivore, omnivore): ")?
            .trim()
            .to_string();
        let weight = parse_float("Weight", &self.ask("Weight (kg): ")?)?;
        let color = self.ask("Color: ")?.trim().to_string();
        let kind = parse_kind(category, &self.ask(kind_prompt(category))?)?;

        Ok(Animal::new(name, age, habitat, food_type, weight, color, kind))
    }
}

/// Why the add-animal form stopped early
#[derive(Debug, Error)]
enum FormError {
    #[error("input closed")]
    Closed,

    #[error(transparent)]
    Invalid(#[from] InputError),

    #[error(transparent)]
    Io(#[from] io::Error),
}

// ============================================================================
// TESTS
// ============================================================================
