//! Defines the static growth and stocking profile of a farmed species.
//! A single table of these profiles drives both the harvest estimator and the
//! operational schedule generator.

use serde::{Deserialize, Serialize};

/// A generic struct to define a minimum and maximum recommended range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ToleranceRange<T> {
    pub min: T,
    pub max: T,
}

/// Recommended stocking density, in fish per square metre.
pub type DensityRange = ToleranceRange<f64>;

/// Stocking range used when the species has no profile.
pub const DEFAULT_DENSITY_RANGE: DensityRange = ToleranceRange { min: 20.0, max: 50.0 };

/// The top-level struct representing a species in the knowledge base.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesProfile {
    /// Lowercase local name used as the lookup key (e.g., "lele").
    pub species_id: String,
    /// A human-readable name for display purposes (e.g., "African catfish").
    pub display_name: String,
    /// Average weight gained per fish per week under baseline conditions, in grams.
    pub weekly_growth_grams: f64,
    /// Recommended stocking density for grow-out ponds.
    pub stocking_density: DensityRange,
}
