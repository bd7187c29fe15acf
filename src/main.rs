//! podium - Olympic medal registry
//!
//! A local-first registry of countries and their medal counts

mod commands;
mod config;
mod models;
mod registry;
mod store;
mod validation;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "podium")]
#[command(author, version, about = "A local-first Olympic medal registry with sortable standings")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize podium (first-time setup)
    Init,

    /// Register a new country
    Add {
        /// Country name (must match the configured name policy)
        name: String,

        /// Gold medal count
        gold: u32,

        /// Silver medal count
        silver: u32,

        /// Bronze medal count
        bronze: u32,
    },

    /// Replace the medal counts of a registered country
    Update {
        /// Country name (exact match)
        name: String,

        /// Gold medal count
        gold: u32,

        /// Silver medal count
        silver: u32,

        /// Bronze medal count
        bronze: u32,
    },

    /// Remove a country from the registry
    Delete {
        /// Country name (exact match)
        name: String,
    },

    /// Show the standings
    List {
        /// Sort by combined medal count instead of gold/silver/bronze
        #[arg(long)]
        total: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a single country
    Show {
        /// Country name (exact match)
        name: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Clear the stored registry
    Reset,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init => {
            commands::init()?;
        }
        Commands::Add {
            name,
            gold,
            silver,
            bronze,
        } => {
            commands::add(&name, gold, silver, bronze)?;
        }
        Commands::Update {
            name,
            gold,
            silver,
            bronze,
        } => {
            commands::update(&name, gold, silver, bronze)?;
        }
        Commands::Delete { name } => {
            commands::delete(&name)?;
        }
        Commands::List { total, json } => {
            let format = if json {
                commands::OutputFormat::Json
            } else {
                commands::OutputFormat::Table
            };
            commands::list(total, format)?;
        }
        Commands::Show { name, json } => {
            let format = if json {
                commands::OutputFormat::Json
            } else {
                commands::OutputFormat::Table
            };
            commands::show(&name, format)?;
        }
        Commands::Reset => {
            commands::reset()?;
        }
    }

    Ok(())
}
