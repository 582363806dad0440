use thiserror::Error;

#[derive(Debug, Error)]
pub enum AquaforgeError {
    #[error("Species profile for '{0}' not found")]
    UnknownSpecies(String),

    #[error("Invalid value for '{field}': {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Pond failed validation: {}", .0.join("; "))]
    InvalidPond(Vec<String>),

    #[error("Invalid price model: {0}")]
    InvalidPriceModel(String),

    #[error("Pond specification is missing")]
    PondNotDefined,

    #[error("ROI parameters are missing")]
    RoiNotDefined,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error for file '{0}': {1}")]
    FileIO(String, #[source] std::io::Error),

    #[error("Failed to parse YAML from '{0}': {1}")]
    YamlParsing(String, #[source] serde_yaml::Error),

    #[error("Failed to process CSV file '{0}': {1}")]
    CsvError(String, #[source] csv::Error),
}

impl AquaforgeError {
    pub(crate) fn invalid(field: &str, reason: impl Into<String>) -> Self {
        AquaforgeError::InvalidInput {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}
