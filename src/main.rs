use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

// Use library instead of local modules
use zoo_registry::{Listing, Shell, ZooRegistry};

#[derive(Parser, Debug)]
#[clap(name = "zoo", about = "Interactive in-memory zoo of animal records", version)]
struct Cli {
    #[clap(subcommand)]
    command: Option<Command>,

    /// Start with an empty zoo instead of the sample animals
    #[clap(long, global = true)]
    empty: bool,

    /// Set log level (RUST_LOG takes precedence when set)
    #[clap(long, default_value = "warn", global = true)]
    log_level: LogLevel,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive menu (default)
    Shell,

    /// Print every animal and exit
    List {
        /// Output records as JSON
        #[clap(long)]
        json: bool,
    },
}

/// Log levels
#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Logs go to stderr so the menu on stdout stays clean
fn initialize_tracing(log_level: &LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_filter_directive()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    initialize_tracing(&cli.log_level);

    let registry = if cli.empty {
        ZooRegistry::new()
    } else {
        ZooRegistry::with_sample_animals()
    };
    tracing::debug!(animals = registry.count(), version = zoo_registry::VERSION, "Registry ready");

    match cli.command.unwrap_or(Command::Shell) {
        Command::Shell => run_shell(&registry)?,
        Command::List { json } => run_list(&registry, json)?,
    }

    Ok(())
}

fn run_shell(registry: &ZooRegistry) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    Shell::new(registry, stdin.lock(), stdout.lock()).run()
}

fn run_list(registry: &ZooRegistry, json: bool) -> Result<()> {
    let mut out = io::stdout().lock();

    if json {
        let animals = registry.all_animals();
        writeln!(out, "{}", serde_json::to_string_pretty(&animals)?)?;
        return Ok(());
    }

    match registry.list_all() {
        Listing::Empty => writeln!(out, "There are no animals in the zoo yet.")?,
        Listing::Records(records) => {
            for record in &records {
                writeln!(out, "{}. {}", record.position, record.description)?;
            }
            writeln!(out, "Total animals: {}", records.len())?;
        }
    }
    Ok(())
}
