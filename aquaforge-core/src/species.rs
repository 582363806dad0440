//! The shared species table. Both the harvest estimator and the schedule
//! generator read growth rates from here.

use crate::error::AquaforgeError;
use aquaforge_schemas::{
    file_formats::SpeciesFile,
    species::{SpeciesProfile, ToleranceRange},
};
use std::collections::BTreeMap;

/// Species the farm planner treats as its baseline.
pub const BASELINE_SPECIES: &str = "lele";

/// What to do when a request names a species with no profile.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UnknownSpeciesPolicy {
    #[default]
    Reject,
    FallbackTo(String),
}

#[derive(Debug, Clone, Default)]
pub struct SpeciesCatalog {
    profiles: BTreeMap<String, SpeciesProfile>,
}

impl SpeciesCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Profiles for the species commonly grown in Indonesian backyard ponds.
    pub fn builtin() -> Self {
        let rows: [(&str, &str, f64, f64, f64); 6] = [
            ("lele", "African catfish", 10.0, 50.0, 100.0),
            ("nila", "Nile tilapia", 7.0, 20.0, 40.0),
            ("patin", "Striped catfish", 12.0, 30.0, 60.0),
            ("gurame", "Giant gourami", 4.0, 10.0, 20.0),
            ("mas", "Common carp", 8.0, 15.0, 30.0),
            ("bawal", "Pirapitinga", 9.0, 20.0, 40.0),
        ];
        Self::from_profiles(rows.into_iter().map(|(id, name, growth, min, max)| SpeciesProfile {
            species_id: id.to_string(),
            display_name: name.to_string(),
            weekly_growth_grams: growth,
            stocking_density: ToleranceRange { min, max },
        }))
    }

    pub fn from_profiles<I: IntoIterator<Item = SpeciesProfile>>(profiles: I) -> Self {
        let mut catalog = Self::new();
        for profile in profiles {
            catalog.insert(profile);
        }
        catalog
    }

    /// Parses a versioned species file. `source` names the file in error messages.
    pub fn from_yaml_str(source: &str, content: &str) -> Result<Self, AquaforgeError> {
        let file: SpeciesFile = serde_yaml::from_str(content)
            .map_err(|e| AquaforgeError::YamlParsing(source.to_string(), e))?;
        for profile in &file.species {
            if profile.weekly_growth_grams <= 0.0 {
                return Err(AquaforgeError::ConfigError(format!(
                    "species '{}' in {} has non-positive weekly growth",
                    profile.species_id, source
                )));
            }
        }
        Ok(Self::from_profiles(file.species))
    }

    pub fn insert(&mut self, profile: SpeciesProfile) {
        self.profiles.insert(normalize(&profile.species_id), profile);
    }

    /// Case-insensitive lookup. Never substitutes a default.
    pub fn get(&self, species: &str) -> Option<&SpeciesProfile> {
        self.profiles.get(&normalize(species))
    }

    /// Looks up `species`, applying `policy` when it has no profile.
    pub fn resolve(
        &self,
        species: &str,
        policy: &UnknownSpeciesPolicy,
    ) -> Result<&SpeciesProfile, AquaforgeError> {
        if let Some(profile) = self.get(species) {
            return Ok(profile);
        }
        match policy {
            UnknownSpeciesPolicy::Reject => Err(AquaforgeError::UnknownSpecies(species.to_string())),
            UnknownSpeciesPolicy::FallbackTo(default_id) => self
                .get(default_id)
                .ok_or_else(|| AquaforgeError::UnknownSpecies(default_id.clone())),
        }
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn profiles(&self) -> impl Iterator<Item = &SpeciesProfile> {
        self.profiles.values()
    }
}

fn normalize(species: &str) -> String {
    species.trim().to_lowercase()
}
