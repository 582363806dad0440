use crate::species::SpeciesProfile;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SpeciesFile {
    pub schema_version: String,
    pub species: Vec<SpeciesProfile>,
}
