// Integration tests for the medal registry
// Covers validation, uniqueness, sorting, and persistence behavior

use anyhow::Result;
use podium::config::PodiumPaths;
use podium::models::SortMode;
use podium::registry::{Registry, RegistryError};
use podium::store::{Store, COUNTRIES_KEY};
use podium::validation::{policy_from_config, NamePolicy, HANGUL_PATTERN};
use std::fs;
use tempfile::TempDir;

/// Setup test environment
fn setup() -> Result<(TempDir, PodiumPaths)> {
    let temp_dir = TempDir::new()?;

    let paths = PodiumPaths {
        root: temp_dir.path().to_path_buf(),
        config: temp_dir.path().join("config.toml"),
        db: temp_dir.path().join("db"),
        db_file: temp_dir.path().join("db/podium.db"),
    };

    fs::create_dir_all(&paths.db)?;
    Store::init(&paths)?;

    Ok((temp_dir, paths))
}

fn open_registry(paths: &PodiumPaths) -> Result<Registry> {
    let store = Store::open(paths)?;
    Ok(Registry::load(store, NamePolicy::default())?)
}

#[test]
fn test_each_successful_add_grows_registry_by_one() -> Result<()> {
    let (_temp, paths) = setup()?;
    let mut registry = open_registry(&paths)?;

    registry.add("Korea", 13, 9, 10)?;
    assert_eq!(registry.len(), 1);

    registry.add("France", 16, 26, 22)?;
    assert_eq!(registry.len(), 2);

    Ok(())
}

#[test]
fn test_failed_adds_cause_zero_size_change() -> Result<()> {
    let (_temp, paths) = setup()?;
    let mut registry = open_registry(&paths)?;

    registry.add("Korea", 13, 9, 10)?;

    assert!(matches!(
        registry.add("Korea", 1, 1, 1),
        Err(RegistryError::DuplicateName(_))
    ));
    assert!(matches!(
        registry.add("Team#1", 1, 1, 1),
        Err(RegistryError::InvalidNameFormat(_))
    ));

    assert_eq!(registry.len(), 1);
    let korea = registry.get("Korea").unwrap();
    assert_eq!((korea.gold, korea.silver, korea.bronze), (13, 9, 10));

    Ok(())
}

#[test]
fn test_update_on_empty_registry_reports_not_found() -> Result<()> {
    let (_temp, paths) = setup()?;
    let mut registry = open_registry(&paths)?;

    assert!(matches!(
        registry.update("Japan", 1, 2, 3),
        Err(RegistryError::NotFound(_))
    ));
    assert!(registry.is_empty());

    Ok(())
}

#[test]
fn test_delete_on_absent_name_reports_no_error() -> Result<()> {
    let (_temp, paths) = setup()?;
    let mut registry = open_registry(&paths)?;

    registry.add("Korea", 13, 9, 10)?;
    registry.delete("Japan")?;
    assert_eq!(registry.len(), 1);

    Ok(())
}

#[test]
fn test_total_view_is_a_weakly_descending_permutation() -> Result<()> {
    let (_temp, paths) = setup()?;
    let mut registry = open_registry(&paths)?;

    registry.add("Korea", 13, 9, 10)?;
    registry.add("France", 16, 26, 22)?;
    registry.add("Japan", 20, 12, 13)?;
    registry.add("Kenya", 4, 2, 5)?;

    let view = registry.sorted_view(SortMode::Total);

    assert_eq!(view.len(), registry.len());
    for record in registry.records() {
        assert!(view.contains(record));
    }
    for pair in view.windows(2) {
        assert!(pair[0].total() >= pair[1].total());
    }

    Ok(())
}

#[test]
fn test_hierarchy_view_orders_lexicographically_descending() -> Result<()> {
    let (_temp, paths) = setup()?;
    let mut registry = open_registry(&paths)?;

    registry.add("Korea", 13, 9, 10)?;
    registry.add("France", 16, 26, 22)?;
    registry.add("Japan", 16, 26, 13)?;
    registry.add("Kenya", 16, 12, 30)?;

    let view = registry.sorted_view(SortMode::Hierarchy);
    let names: Vec<_> = view.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["France", "Japan", "Kenya", "Korea"]);

    Ok(())
}

#[test]
fn test_spec_example_korea_france() -> Result<()> {
    let (_temp, paths) = setup()?;
    let mut registry = open_registry(&paths)?;

    registry.add("Korea", 13, 9, 10)?;
    registry.add("France", 16, 26, 22)?;

    let hierarchy = registry.sorted_view(SortMode::Hierarchy);
    assert_eq!(hierarchy[0].name, "France");
    assert_eq!(hierarchy[1].name, "Korea");

    let total = registry.sorted_view(SortMode::Total);
    assert_eq!(total[0].total(), 64);
    assert_eq!(total[1].total(), 32);

    Ok(())
}

#[test]
fn test_hangul_policy_from_config_pattern() -> Result<()> {
    let (_temp, paths) = setup()?;

    let policy = policy_from_config(Some(HANGUL_PATTERN))?;
    let store = Store::open(&paths)?;
    let mut registry = Registry::load(store, policy)?;

    registry.add("대한민국", 13, 9, 10)?;
    assert!(matches!(
        registry.add("Korea", 16, 26, 22),
        Err(RegistryError::InvalidNameFormat(_))
    ));
    assert_eq!(registry.len(), 1);

    Ok(())
}

#[test]
fn test_registry_survives_process_restart() -> Result<()> {
    let (_temp, paths) = setup()?;

    {
        let mut registry = open_registry(&paths)?;
        registry.add("Korea", 13, 9, 10)?;
        registry.update("Korea", 14, 9, 10)?;
    }

    let registry = open_registry(&paths)?;
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.get("Korea").unwrap().gold, 14);

    Ok(())
}

#[test]
fn test_reset_clears_the_stored_collection() -> Result<()> {
    let (_temp, paths) = setup()?;

    {
        let mut registry = open_registry(&paths)?;
        registry.add("Korea", 13, 9, 10)?;
    }

    let store = Store::open(&paths)?;
    store.remove(COUNTRIES_KEY)?;

    let registry = open_registry(&paths)?;
    assert!(registry.is_empty());

    Ok(())
}

#[test]
fn test_corrupt_stored_data_loads_as_empty_registry() -> Result<()> {
    let (_temp, paths) = setup()?;

    // Write garbage where the serialized collection lives
    let store = Store::open(&paths)?;
    store.save(COUNTRIES_KEY, &[])?;
    drop(store);

    let conn = rusqlite::Connection::open(&paths.db_file)?;
    conn.execute(
        "UPDATE collections SET value = 'garbage' WHERE key = ?1",
        rusqlite::params![COUNTRIES_KEY],
    )?;
    drop(conn);

    let registry = open_registry(&paths)?;
    assert!(registry.is_empty());

    Ok(())
}
