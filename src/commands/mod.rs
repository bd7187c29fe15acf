//! CLI commands for podium

use anyhow::{bail, Result};

use crate::config::{load_config, save_config, Config, PodiumPaths};
use crate::registry::Registry;
use crate::store::{Store, COUNTRIES_KEY};
use crate::validation::policy_from_config;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Table,
}

/// Initialize podium for first-time setup
pub fn init() -> Result<()> {
    let paths = PodiumPaths::new()?;

    if paths.is_initialized() {
        println!("Podium is already initialized at {}", paths.root.display());
        return Ok(());
    }

    println!("Initializing podium at {}...", paths.root.display());

    paths.ensure_dirs()?;
    println!("  Created directory structure");

    let config = Config::default();
    save_config(&paths, &config)?;
    println!("  Created config.toml");

    Store::init(&paths)?;
    println!("  Created database");

    println!();
    println!("Podium initialized successfully!");
    println!();
    println!("Next steps:");
    println!("  podium add <name> <gold> <silver> <bronze>   Register a country");
    println!("  podium list                                  Show the standings");

    Ok(())
}

/// Register a new country
pub fn add(name: &str, gold: u32, silver: u32, bronze: u32) -> Result<()> {
    let paths = PodiumPaths::new()?;
    let mut registry = open_registry(&paths)?;

    registry.add(name, gold, silver, bronze)?;

    println!("Registered: {}", name);
    println!("  Gold:   {}", gold);
    println!("  Silver: {}", silver);
    println!("  Bronze: {}", bronze);

    Ok(())
}

/// Replace the medal counts of an existing country
pub fn update(name: &str, gold: u32, silver: u32, bronze: u32) -> Result<()> {
    let paths = PodiumPaths::new()?;
    let mut registry = open_registry(&paths)?;

    registry.update(name, gold, silver, bronze)?;

    println!("Updated: {} → {} gold, {} silver, {} bronze", name, gold, silver, bronze);

    Ok(())
}

/// Remove a country by name
pub fn delete(name: &str) -> Result<()> {
    let paths = PodiumPaths::new()?;
    let mut registry = open_registry(&paths)?;

    let existed = registry.get(name).is_some();
    registry.delete(name)?;

    if existed {
        println!("Removed: {}", name);
    } else {
        println!("Nothing to remove: '{}' is not registered", name);
    }

    Ok(())
}

/// Print the standings under the requested sort mode
pub fn list(by_total: bool, format: OutputFormat) -> Result<()> {
    let paths = PodiumPaths::new()?;
    let mut registry = open_registry(&paths)?;

    // Default mode is hierarchy; the --total flag is the checkbox toggle.
    if by_total {
        registry.toggle_sort_mode();
    }
    let view = registry.view();

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&view)?);
        }
        OutputFormat::Table => {
            if view.is_empty() {
                println!("No countries registered yet.");
                println!("Add one with: podium add <name> <gold> <silver> <bronze>");
                return Ok(());
            }

            println!("Standings ({})", registry.sort_mode());
            println!(
                "{:<6} {:<20} {:>6} {:>8} {:>8} {:>7}",
                "RANK", "COUNTRY", "GOLD", "SILVER", "BRONZE", "TOTAL"
            );
            println!("{}", "-".repeat(60));

            for (idx, country) in view.iter().enumerate() {
                println!(
                    "{:<6} {:<20} {:>6} {:>8} {:>8} {:>7}",
                    idx + 1,
                    truncate(&country.name, 18),
                    country.gold,
                    country.silver,
                    country.bronze,
                    country.total()
                );
            }
        }
    }

    Ok(())
}

/// Show a single country's record
pub fn show(name: &str, format: OutputFormat) -> Result<()> {
    let paths = PodiumPaths::new()?;
    let registry = open_registry(&paths)?;

    let country = registry
        .get(name)
        .ok_or_else(|| anyhow::anyhow!("Country not found: {}", name))?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(country)?);
        }
        OutputFormat::Table => {
            println!("Country: {}", country.name);
            println!("{}", "=".repeat(30));
            println!("Gold:   {}", country.gold);
            println!("Silver: {}", country.silver);
            println!("Bronze: {}", country.bronze);
            println!("Total:  {}", country.total());
        }
    }

    Ok(())
}

/// Clear the stored registry
pub fn reset() -> Result<()> {
    let paths = PodiumPaths::new()?;
    ensure_initialized(&paths)?;

    let store = Store::open(&paths)?;
    store.remove(COUNTRIES_KEY)?;

    println!("Registry cleared.");
    Ok(())
}

fn open_registry(paths: &PodiumPaths) -> Result<Registry> {
    ensure_initialized(paths)?;

    let config = load_config(paths)?;
    let policy = policy_from_config(config.name_pattern.as_deref())?;
    let store = Store::open(paths)?;

    Ok(Registry::load(store, policy)?)
}

fn ensure_initialized(paths: &PodiumPaths) -> Result<()> {
    if !paths.is_initialized() {
        bail!("Podium not initialized. Run `podium init` first.");
    }
    Ok(())
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max - 3).collect();
        format!("{}...", cut)
    }
}
