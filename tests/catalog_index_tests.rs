use anyhow::Result;
use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

use fe_stats::config::{CatalogConfig, EditionConfig};
use fe_stats::{CatalogError, CatalogLoader, EditionFamily};

fn classic_record(name: &str) -> Value {
    json!({
        "name": name,
        "class": "Myrmidon",
        "level": 1,
        "base_stats": {
            "hp": 20, "str": 7, "mag": 0, "skl": 9,
            "spd": 13, "lck": 2, "def": 6, "res": 0
        },
        "growth_rates": {
            "hp": 70, "str": 30, "mag": 0, "skl": 50,
            "spd": 70, "lck": 40, "def": 10, "res": 3
        }
    })
}

fn write_record(dir: &Path, file_name: &str, record: &Value) -> Result<()> {
    fs::create_dir_all(dir)?;
    fs::write(dir.join(file_name), serde_json::to_string_pretty(record)?)?;
    Ok(())
}

fn edition(name: &str, folder: &str, family: EditionFamily) -> EditionConfig {
    EditionConfig {
        name: name.to_string(),
        folder: folder.to_string(),
        family,
    }
}

#[test]
fn both_name_forms_resolve_to_the_friendly_name() -> Result<()> {
    let base = tempdir()?;
    write_record(
        &base.path().join("FE1"),
        "navarre.json",
        &classic_record("Navarre"),
    )?;

    let loaded = CatalogLoader::new(CatalogConfig {
        base_dir: base.path().to_path_buf(),
        editions: vec![edition("shadow_dragon", "FE1", EditionFamily::Classic)],
    })
    .load()?;

    for input in ["FE1", "fe1", "Fe1", "shadow_dragon", "Shadow_Dragon"] {
        assert_eq!(loaded.index.resolve_edition(input), Some("shadow_dragon"));
    }
    assert_eq!(loaded.index.resolve_edition("fe999"), None);
    Ok(())
}

#[test]
fn entry_lookup_is_case_insensitive() -> Result<()> {
    let base = tempdir()?;
    write_record(
        &base.path().join("FE1"),
        "navarre.json",
        &classic_record("Navarre"),
    )?;

    let loaded = CatalogLoader::new(CatalogConfig {
        base_dir: base.path().to_path_buf(),
        editions: vec![edition("shadow_dragon", "FE1", EditionFamily::Classic)],
    })
    .load()?;

    let lower = loaded.index.get("shadow_dragon", None, "navarre")?;
    let upper = loaded.index.get("FE1", None, "NAVARRE")?;
    let mixed = loaded.index.get("fe1", None, "Navarre")?;
    assert_eq!(lower.name, "Navarre");
    assert_eq!(upper.name, lower.name);
    assert_eq!(mixed.name, lower.name);
    assert_eq!(lower.edition, "shadow_dragon");
    Ok(())
}

#[test]
fn malformed_sibling_is_skipped_with_a_warning() -> Result<()> {
    let base = tempdir()?;
    let dir = base.path().join("FE1");
    write_record(&dir, "navarre.json", &classic_record("Navarre"))?;
    fs::write(dir.join("ogma.json"), "{ not json at all")?;

    let loaded = CatalogLoader::new(CatalogConfig {
        base_dir: base.path().to_path_buf(),
        editions: vec![edition("shadow_dragon", "FE1", EditionFamily::Classic)],
    })
    .load()?;

    assert_eq!(loaded.index.len(), 1);
    assert!(loaded.index.get("FE1", None, "navarre").is_ok());
    assert_eq!(loaded.warnings.len(), 1);
    assert!(loaded.warnings[0].contains("ogma.json"));
    Ok(())
}

#[test]
fn record_failing_its_family_schema_is_skipped() -> Result<()> {
    let base = tempdir()?;
    let dir = base.path().join("FE1");
    write_record(&dir, "navarre.json", &classic_record("Navarre"))?;

    // wgt is a console-family field; classic rejects it wholesale
    let mut stray = classic_record("Ogma");
    stray["base_stats"]["wgt"] = json!(10);
    write_record(&dir, "ogma.json", &stray)?;

    let loaded = CatalogLoader::new(CatalogConfig {
        base_dir: base.path().to_path_buf(),
        editions: vec![edition("shadow_dragon", "FE1", EditionFamily::Classic)],
    })
    .load()?;

    assert_eq!(loaded.index.len(), 1);
    assert_eq!(loaded.warnings.len(), 1);
    assert!(matches!(
        loaded.index.get("FE1", None, "ogma"),
        Err(CatalogError::EntryNotFound { .. })
    ));
    Ok(())
}

#[test]
fn missing_edition_directory_still_resolves() -> Result<()> {
    let base = tempdir()?;
    write_record(
        &base.path().join("FE1"),
        "navarre.json",
        &classic_record("Navarre"),
    )?;

    let loaded = CatalogLoader::new(CatalogConfig {
        base_dir: base.path().to_path_buf(),
        editions: vec![
            edition("shadow_dragon", "FE1", EditionFamily::Classic),
            edition("binding_blade", "FE6", EditionFamily::Classic),
        ],
    })
    .load()?;

    // The edition is known; it just has nothing loaded.
    assert_eq!(loaded.index.resolve_edition("FE6"), Some("binding_blade"));
    assert!(matches!(
        loaded.index.get("binding_blade", None, "roy"),
        Err(CatalogError::EntryNotFound { .. })
    ));
    assert!(loaded.warnings.iter().any(|w| w.contains("binding_blade")));

    // And it stays out of the listing of editions with loaded entries.
    assert_eq!(loaded.index.editions(), vec!["shadow_dragon"]);
    Ok(())
}

#[test]
fn unknown_edition_and_unknown_entry_are_distinct() -> Result<()> {
    let base = tempdir()?;
    write_record(
        &base.path().join("FE1"),
        "navarre.json",
        &classic_record("Navarre"),
    )?;

    let loaded = CatalogLoader::new(CatalogConfig {
        base_dir: base.path().to_path_buf(),
        editions: vec![edition("shadow_dragon", "FE1", EditionFamily::Classic)],
    })
    .load()?;

    assert!(matches!(
        loaded.index.get("fe999", None, "navarre"),
        Err(CatalogError::EditionNotFound(_))
    ));
    assert!(matches!(
        loaded.index.get("FE1", None, "nonexistent_unit"),
        Err(CatalogError::EntryNotFound { .. })
    ));
    Ok(())
}

#[test]
fn path_fragments_fail_as_invalid_names_not_lookups() -> Result<()> {
    let base = tempdir()?;
    write_record(
        &base.path().join("FE1"),
        "navarre.json",
        &classic_record("Navarre"),
    )?;

    let loaded = CatalogLoader::new(CatalogConfig {
        base_dir: base.path().to_path_buf(),
        editions: vec![edition("shadow_dragon", "FE1", EditionFamily::Classic)],
    })
    .load()?;

    for bad in ["../etc/passwd", "navarre.json", "na varre", ""] {
        assert!(
            matches!(
                loaded.index.get("FE1", None, bad),
                Err(CatalogError::InvalidEntryName(_))
            ),
            "{bad:?} should be rejected before any lookup"
        );
    }
    Ok(())
}

#[test]
fn projections_match_the_full_record() -> Result<()> {
    let base = tempdir()?;
    write_record(
        &base.path().join("FE1"),
        "navarre.json",
        &classic_record("Navarre"),
    )?;

    let loaded = CatalogLoader::new(CatalogConfig {
        base_dir: base.path().to_path_buf(),
        editions: vec![edition("shadow_dragon", "FE1", EditionFamily::Classic)],
    })
    .load()?;

    let entry = loaded.index.get("FE1", None, "navarre")?;
    assert_eq!(
        loaded.index.base_stats("FE1", None, "navarre")?,
        &entry.base_stats
    );
    assert_eq!(
        loaded.index.growth_rates("FE1", None, "navarre")?,
        &entry.growth_rates
    );
    Ok(())
}

#[test]
fn book_subdirectories_load_as_sub_editions() -> Result<()> {
    let base = tempdir()?;
    let dir = base.path().join("FE3");
    write_record(&dir, "caeda.json", &classic_record("Caeda"))?;

    let mut book1_marth = classic_record("Marth");
    book1_marth["level"] = json!(1);
    let mut book2_marth = classic_record("Marth");
    book2_marth["level"] = json!(3);
    write_record(&dir.join("book1"), "marth.json", &book1_marth)?;
    write_record(&dir.join("book2"), "marth.json", &book2_marth)?;

    let loaded = CatalogLoader::new(CatalogConfig {
        base_dir: base.path().to_path_buf(),
        editions: vec![edition("mystery_of_the_emblem", "FE3", EditionFamily::Classic)],
    })
    .load()?;

    assert_eq!(loaded.index.len(), 3);
    assert_eq!(loaded.index.books("FE3")?, vec!["book1", "book2"]);

    // Books are case-insensitive like everything else.
    let b1 = loaded.index.get("FE3", Some("Book1"), "Marth")?;
    let b2 = loaded.index.get("fe3", Some("book2"), "marth")?;
    assert_eq!(b1.level, 1);
    assert_eq!(b2.level, 3);

    // The top-level listing carries only the entries outside any book.
    let top = loaded.index.summaries("FE3", None)?;
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].name, "Caeda");

    let in_book = loaded.index.summaries("FE3", Some("book1"))?;
    assert_eq!(in_book.len(), 1);
    assert_eq!(in_book[0].name, "Marth");
    Ok(())
}

#[test]
fn bad_file_names_are_skipped_with_a_warning() -> Result<()> {
    let base = tempdir()?;
    let dir = base.path().join("FE1");
    write_record(&dir, "navarre.json", &classic_record("Navarre"))?;
    write_record(&dir, "bad name.json", &classic_record("Nameless"))?;

    let loaded = CatalogLoader::new(CatalogConfig {
        base_dir: base.path().to_path_buf(),
        editions: vec![edition("shadow_dragon", "FE1", EditionFamily::Classic)],
    })
    .load()?;

    assert_eq!(loaded.index.len(), 1);
    assert_eq!(loaded.warnings.len(), 1);
    assert!(loaded.warnings[0].contains("bad name.json"));
    Ok(())
}

#[test]
fn duplicate_folder_codes_fail_startup() -> Result<()> {
    let base = tempdir()?;

    let result = CatalogLoader::new(CatalogConfig {
        base_dir: base.path().to_path_buf(),
        editions: vec![
            edition("shadow_dragon", "FE1", EditionFamily::Classic),
            edition("new_mystery", "fe1", EditionFamily::Classic),
        ],
    })
    .load();

    assert!(matches!(result, Err(CatalogError::Config(_))));
    Ok(())
}

#[test]
fn duplicate_friendly_names_fail_startup() -> Result<()> {
    let base = tempdir()?;

    let result = CatalogLoader::new(CatalogConfig {
        base_dir: base.path().to_path_buf(),
        editions: vec![
            edition("shadow_dragon", "FE1", EditionFamily::Classic),
            edition("Shadow_Dragon", "FE11", EditionFamily::Classic),
        ],
    })
    .load();

    assert!(matches!(result, Err(CatalogError::Config(_))));
    Ok(())
}

#[test]
fn missing_base_directory_is_fatal() {
    let result = CatalogLoader::new(CatalogConfig {
        base_dir: "/nonexistent/catalog/root".into(),
        editions: vec![edition("shadow_dragon", "FE1", EditionFamily::Classic)],
    })
    .load();

    assert!(matches!(result, Err(CatalogError::Startup { .. })));
}
