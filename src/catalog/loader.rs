use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;
use tracing::info;

use crate::common::error::{CatalogError, Result};
use crate::config::{CatalogConfig, EditionConfig};
use crate::domain::Entry;

use super::index::{entry_name_is_valid, CatalogIndex};

/// Result of one startup load: the immutable index plus everything that
/// was skipped along the way.
pub struct LoadedCatalog {
    pub index: CatalogIndex,
    pub warnings: Vec<String>,
}

/// Builds the [`CatalogIndex`] once at startup.
///
/// Per-file and per-edition problems become warnings so that one bad file
/// never takes out the rest of the catalog. Only an inaccessible base
/// directory or a broken edition map is fatal.
pub struct CatalogLoader {
    config: CatalogConfig,
}

impl CatalogLoader {
    pub fn new(config: CatalogConfig) -> Self {
        Self { config }
    }

    pub fn load(&self) -> Result<LoadedCatalog> {
        let base_dir = &self.config.base_dir;
        if !base_dir.is_dir() {
            return Err(CatalogError::Startup {
                message: format!(
                    "Catalog base directory does not exist: {}",
                    base_dir.display()
                ),
            });
        }
        self.check_edition_map()?;

        let mut entries = HashMap::new();
        let mut friendly = HashMap::new();
        let mut aliases = HashMap::new();
        let mut warnings = Vec::new();

        for edition in &self.config.editions {
            // Both name forms resolve even when the directory is absent or
            // every file in it fails validation.
            friendly.insert(edition.name.to_lowercase(), edition.name.clone());
            aliases.insert(edition.folder.to_lowercase(), edition.name.clone());

            let dir = base_dir.join(&edition.folder);
            if !dir.is_dir() {
                warnings.push(format!(
                    "Edition directory missing for '{}': {}",
                    edition.name,
                    dir.display()
                ));
                continue;
            }
            self.load_edition_dir(edition, &dir, None, &mut entries, &mut warnings);
        }

        info!(
            entries = entries.len(),
            editions = self.config.editions.len(),
            warnings = warnings.len(),
            "catalog index built"
        );

        Ok(LoadedCatalog {
            index: CatalogIndex {
                entries,
                friendly,
                aliases,
            },
            warnings,
        })
    }

    /// Friendly names and folder codes must be unique case-insensitively;
    /// a collision would make alias resolution ambiguous.
    fn check_edition_map(&self) -> Result<()> {
        let mut names = HashSet::new();
        let mut folders = HashSet::new();
        for edition in &self.config.editions {
            if !names.insert(edition.name.to_lowercase()) {
                return Err(CatalogError::Config(format!(
                    "Duplicate edition name in config: {}",
                    edition.name
                )));
            }
            if !folders.insert(edition.folder.to_lowercase()) {
                return Err(CatalogError::Config(format!(
                    "Duplicate edition folder in config: {}",
                    edition.folder
                )));
            }
        }
        Ok(())
    }

    fn load_edition_dir(
        &self,
        edition: &EditionConfig,
        dir: &Path,
        book: Option<&str>,
        entries: &mut HashMap<(String, String, String), Entry>,
        warnings: &mut Vec<String>,
    ) {
        let read = match fs::read_dir(dir) {
            Ok(read) => read,
            Err(e) => {
                warnings.push(format!("Failed to read directory {}: {}", dir.display(), e));
                return;
            }
        };

        for dir_entry in read {
            let path = match dir_entry {
                Ok(d) => d.path(),
                Err(e) => {
                    warnings.push(format!(
                        "Failed to read an entry of {}: {}",
                        dir.display(),
                        e
                    ));
                    continue;
                }
            };

            if path.is_dir() {
                // One level of "book" sub-editions; anything deeper is not
                // part of the layout.
                if book.is_some() {
                    continue;
                }
                match path.file_name().and_then(|s| s.to_str()) {
                    Some(name) if entry_name_is_valid(name) => {
                        let book_name = name.to_lowercase();
                        self.load_edition_dir(edition, &path, Some(&book_name), entries, warnings);
                    }
                    _ => warnings.push(format!(
                        "Skipping directory {}: book names may only contain [A-Za-z0-9_-]",
                        path.display()
                    )),
                }
                continue;
            }

            if path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }

            let stem = match path.file_stem().and_then(|s| s.to_str()) {
                Some(s) => s.to_string(),
                None => {
                    warnings.push(format!("Skipping {}: unreadable file name", path.display()));
                    continue;
                }
            };
            if !entry_name_is_valid(&stem) {
                warnings.push(format!(
                    "Skipping {}: entry file names may only contain [A-Za-z0-9_-]",
                    path.display()
                ));
                continue;
            }

            match self.load_entry_file(edition, &stem, &path) {
                Ok(entry) => {
                    let key = (
                        edition.name.clone(),
                        book.unwrap_or("").to_string(),
                        stem.to_lowercase(),
                    );
                    if entries.contains_key(&key) {
                        warnings.push(format!(
                            "Duplicate entry '{}' in edition '{}', keeping the first one loaded",
                            key.2, key.0
                        ));
                        continue;
                    }
                    entries.insert(key, entry);
                }
                Err(e) => warnings.push(format!("Skipping {}: {}", path.display(), e)),
            }
        }
    }

    fn load_entry_file(&self, edition: &EditionConfig, stem: &str, path: &Path) -> Result<Entry> {
        let raw = fs::read_to_string(path)?;
        let record: Value = serde_json::from_str(&raw)?;

        if let Err(violations) = edition.family.validate(&record) {
            return Err(CatalogError::MalformedRecord {
                name: stem.to_string(),
                message: violations.join("; "),
            });
        }

        let mut entry: Entry = serde_json::from_value(record)?;
        entry.edition = edition.name.clone();
        Ok(entry)
    }
}
