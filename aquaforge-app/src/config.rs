use anyhow::{Context, Result};
use aquaforge_core::species::SpeciesCatalog;
use std::{fs, path::Path};

/// A container for all the static data loaded from YAML files.
/// This represents the complete "knowledge base" for a planning run.
pub struct KnowledgeBase {
    pub species: SpeciesCatalog,
}

impl KnowledgeBase {
    /// Loads all data from the specified base directory. A missing directory
    /// yields the built-in species table.
    pub fn load(base_path: &str) -> Result<Self> {
        let species_dir = Path::new(base_path).join("1_species");
        if !species_dir.is_dir() {
            println!(
                "Knowledge base '{}' not found; using built-in species profiles.",
                base_path
            );
            return Ok(Self {
                species: SpeciesCatalog::builtin(),
            });
        }

        println!("Loading knowledge base from '{}'...", base_path);
        let species = load_species_files(&species_dir)?;
        println!(
            "Knowledge base loaded successfully ({} species).",
            species.len()
        );
        Ok(Self { species })
    }
}

/// Loads every YAML species file in a directory. Later files override earlier
/// entries with the same id.
fn load_species_files(dir_path: &Path) -> Result<SpeciesCatalog> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir_path)
        .with_context(|| format!("Failed to read directory: {:?}", dir_path))?
    {
        let path = entry?.path();
        if path.is_file() && path.extension().map_or(false, |s| s == "yaml" || s == "yml") {
            paths.push(path);
        }
    }
    paths.sort();

    let mut catalog = SpeciesCatalog::new();
    for path in paths {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {:?}", path))?;
        let file_catalog = SpeciesCatalog::from_yaml_str(&path.to_string_lossy(), &content)?;
        for profile in file_catalog.profiles() {
            catalog.insert(profile.clone());
        }
    }
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_directory_falls_back_to_builtin() {
        let kb = KnowledgeBase::load("./definitely/not/here").unwrap();
        assert!(kb.species.get("lele").is_some());
        assert_eq!(kb.species.len(), SpeciesCatalog::builtin().len());
    }

    #[test]
    fn loads_species_directory() {
        let base = std::env::temp_dir().join(format!("aquaforge-kb-{}", std::process::id()));
        let species_dir = base.join("1_species");
        fs::create_dir_all(&species_dir).unwrap();
        fs::write(
            species_dir.join("shrimp.yaml"),
            "schema_version: \"1.0\"\nspecies:\n  - species_id: Vaname\n    display_name: Whiteleg shrimp\n    weekly_growth_grams: 1.5\n    stocking_density: { min: 100.0, max: 300.0 }\n",
        )
        .unwrap();

        let kb = KnowledgeBase::load(&base.to_string_lossy()).unwrap();
        assert_eq!(kb.species.len(), 1);
        assert_eq!(kb.species.get("vaname").unwrap().weekly_growth_grams, 1.5);
        fs::remove_dir_all(&base).unwrap();
    }
}
