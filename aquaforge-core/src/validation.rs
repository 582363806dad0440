//! Input guards. `validate_pond` produces a structured report for the farmer;
//! the other guards reject parameter sets that would produce meaningless
//! numbers downstream.

use crate::error::AquaforgeError;
use aquaforge_schemas::{
    growth::EtpInput,
    pond::{PondSpec, PondType, ValidationReport},
    roi::RoiParameters,
    schedule::RosInput,
    species::{SpeciesProfile, DEFAULT_DENSITY_RANGE},
};

pub const MIN_POND_SIDE_M: f64 = 2.0;
pub const MIN_DEPTH_M: f64 = 0.5;
pub const MAX_DEPTH_M: f64 = 3.0;
pub const MIN_VOLUME_M3: f64 = 5.0;
pub const MAX_VOLUME_M3: f64 = 1000.0;
/// Density above `max * OVERSTOCK_FACTOR` is an error rather than a warning.
pub const OVERSTOCK_FACTOR: f64 = 1.2;
pub const TERPAL_POPULATION_LIMIT: f64 = 10_000.0;

/// Checks pond geometry and stocking density against the species range.
///
/// `profile` is `None` when the species has no profile; the default range
/// `{20, 50}` is used and a warning says so.
pub fn validate_pond(pond: &PondSpec, profile: Option<&SpeciesProfile>) -> ValidationReport {
    let mut warnings = Vec::new();
    let mut errors = Vec::new();

    if pond.length < MIN_POND_SIDE_M || pond.width < MIN_POND_SIDE_M {
        errors.push(format!(
            "Pond length and width must be at least {} m (got {} x {} m)",
            MIN_POND_SIDE_M, pond.length, pond.width
        ));
    }
    if pond.depth < MIN_DEPTH_M || pond.depth > MAX_DEPTH_M {
        errors.push(format!(
            "Pond depth must be between {} and {} m (got {} m)",
            MIN_DEPTH_M, MAX_DEPTH_M, pond.depth
        ));
    }

    let volume = pond.volume();
    if volume < MIN_VOLUME_M3 {
        warnings.push(format!(
            "Water volume of {:.1} m³ is small; water quality will swing quickly",
            volume
        ));
    }
    if volume > MAX_VOLUME_M3 {
        warnings.push(format!(
            "Water volume of {:.1} m³ is large; plan for extra aeration and pumping",
            volume
        ));
    }

    let range = match profile {
        Some(p) => p.stocking_density,
        None => {
            warnings.push(format!(
                "No stocking profile for species '{}'; using the general range {}-{} fish/m²",
                pond.species, DEFAULT_DENSITY_RANGE.min, DEFAULT_DENSITY_RANGE.max
            ));
            DEFAULT_DENSITY_RANGE
        }
    };

    let density = pond.stocking_density;
    let overstock_limit = range.max * OVERSTOCK_FACTOR;
    if density < range.min {
        warnings.push(format!(
            "Stocking density of {} fish/m² is below the recommended minimum of {}",
            density, range.min
        ));
    } else if density > overstock_limit {
        errors.push(format!(
            "Overstocking: {} fish/m² exceeds the safe limit of {} fish/m²",
            density, overstock_limit
        ));
    } else if density > range.max {
        warnings.push(format!(
            "Stocking density of {} fish/m² is above the recommended maximum of {}",
            density, range.max
        ));
    }

    let population = pond.total_fish();
    if pond.pond_type == PondType::Terpal && population > TERPAL_POPULATION_LIMIT {
        warnings.push(format!(
            "{:.0} fish is a large population for a tarpaulin pond (over {:.0})",
            population, TERPAL_POPULATION_LIMIT
        ));
    }

    ValidationReport {
        is_valid: errors.is_empty(),
        warnings,
        errors,
    }
}

pub fn validate_etp_input(input: &EtpInput) -> Result<(), AquaforgeError> {
    ensure_positive("starting_weight", input.starting_weight)?;
    ensure_positive("target_weight", input.target_weight)?;
    if input.target_weight <= input.starting_weight {
        return Err(AquaforgeError::invalid(
            "target_weight",
            format!(
                "target weight {} g must exceed starting weight {} g",
                input.target_weight, input.starting_weight
            ),
        ));
    }
    if let Some(t) = input.water_temperature {
        ensure_finite("water_temperature", t)?;
    }
    Ok(())
}

pub fn validate_ros_input(input: &RosInput) -> Result<(), AquaforgeError> {
    ensure_positive("total_fish", input.total_fish)?;
    ensure_positive("surface_area", input.surface_area)?;
    ensure_positive("target_harvest_weight", input.target_harvest_weight)?;
    Ok(())
}

pub fn validate_roi_parameters(params: &RoiParameters) -> Result<(), AquaforgeError> {
    ensure_positive("stocking_density", params.stocking_density)?;
    ensure_positive("surface_area", params.surface_area)?;
    if !(params.sr > 0.0 && params.sr <= 1.0) {
        return Err(AquaforgeError::invalid(
            "sr",
            format!("survival rate must be in (0, 1], got {}", params.sr),
        ));
    }
    ensure_positive("fcr", params.fcr)?;
    ensure_positive("average_weight_at_harvest", params.average_weight_at_harvest)?;
    ensure_non_negative("feed_price_per_kg", params.feed_price_per_kg)?;
    ensure_non_negative("seed_price_per_fish", params.seed_price_per_fish)?;
    ensure_non_negative("selling_price_per_kg", params.selling_price_per_kg)?;
    ensure_non_negative("other_costs", params.other_costs)?;
    ensure_non_negative("freight_cost", params.freight_cost)?;
    Ok(())
}

fn ensure_finite(field: &str, value: f64) -> Result<(), AquaforgeError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(AquaforgeError::invalid(field, "must be a finite number"))
    }
}

fn ensure_positive(field: &str, value: f64) -> Result<(), AquaforgeError> {
    ensure_finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(AquaforgeError::invalid(field, format!("must be greater than 0, got {}", value)))
    }
}

fn ensure_non_negative(field: &str, value: f64) -> Result<(), AquaforgeError> {
    ensure_finite(field, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(AquaforgeError::invalid(field, format!("must not be negative, got {}", value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::species::SpeciesCatalog;
    use chrono::NaiveDate;

    fn pond(pond_type: PondType, length: f64, width: f64, depth: f64, density: f64) -> PondSpec {
        PondSpec {
            pond_type,
            length,
            width,
            depth,
            stocking_density: density,
            species: "lele".to_string(),
        }
    }

    #[test]
    fn overstocked_tarpaulin_pond_is_invalid() {
        let catalog = SpeciesCatalog::builtin();
        let p = pond(PondType::Terpal, 5.0, 5.0, 1.0, 500.0);
        let report = validate_pond(&p, catalog.get(&p.species));

        assert!(!report.is_valid);
        assert!(report.errors.iter().any(|e| e.starts_with("Overstocking")));
        assert!(report.warnings.iter().any(|w| w.contains("tarpaulin")));
    }

    #[test]
    fn overstock_boundary_is_a_warning() {
        let catalog = SpeciesCatalog::builtin();
        let lele = catalog.get("lele");

        let at_limit = validate_pond(&pond(PondType::Beton, 4.0, 4.0, 1.0, 120.0), lele);
        assert!(at_limit.is_valid);
        assert!(at_limit.warnings.iter().any(|w| w.contains("above the recommended maximum")));

        let past_limit = validate_pond(&pond(PondType::Beton, 4.0, 4.0, 1.0, 120.01), lele);
        assert!(!past_limit.is_valid);
        assert_eq!(past_limit.errors.len(), 1);
    }

    #[test]
    fn geometry_errors_and_volume_warnings() {
        let report = validate_pond(&pond(PondType::Beton, 1.5, 3.0, 0.4, 30.0), None);
        assert_eq!(report.errors.len(), 2);
        // 1.8 m³ plus the unknown-profile note
        assert!(report.warnings.iter().any(|w| w.contains("small")));
        assert!(report.warnings.iter().any(|w| w.contains("No stocking profile")));

        let big = validate_pond(&pond(PondType::Beton, 30.0, 20.0, 2.0, 30.0), None);
        assert!(big.is_valid);
        assert!(big.warnings.iter().any(|w| w.contains("large")));
    }

    #[test]
    fn understocked_pond_only_warns() {
        let catalog = SpeciesCatalog::builtin();
        let report = validate_pond(&pond(PondType::Beton, 4.0, 5.0, 1.0, 30.0), catalog.get("lele"));
        assert!(report.is_valid);
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("below the recommended minimum"));
    }

    #[test]
    fn concrete_pond_has_no_population_warning() {
        let catalog = SpeciesCatalog::builtin();
        let report = validate_pond(&pond(PondType::Beton, 12.0, 10.0, 1.0, 100.0), catalog.get("lele"));
        assert!(report.is_valid);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn etp_guard_rejects_non_growth() {
        let input = EtpInput {
            species: "lele".to_string(),
            starting_weight: 150.0,
            target_weight: 120.0,
            start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            water_temperature: None,
            feed_quality: None,
        };
        let err = validate_etp_input(&input).unwrap_err();
        assert!(matches!(err, AquaforgeError::InvalidInput { ref field, .. } if field == "target_weight"));
    }

    #[test]
    fn roi_guard_checks_survival_rate() {
        let mut params = RoiParameters {
            stocking_density: 50.0,
            surface_area: 20.0,
            sr: 0.85,
            fcr: 1.2,
            feed_price_per_kg: 11_000.0,
            seed_price_per_fish: 300.0,
            selling_price_per_kg: 28_000.0,
            average_weight_at_harvest: 120.0,
            other_costs: 1_800_000.0,
            freight_cost: 500_000.0,
        };
        assert!(validate_roi_parameters(&params).is_ok());

        params.sr = 0.0;
        assert!(validate_roi_parameters(&params).is_err());
        params.sr = 1.2;
        assert!(validate_roi_parameters(&params).is_err());
        params.sr = 0.8;
        params.freight_cost = -1.0;
        assert!(validate_roi_parameters(&params).is_err());
    }
}
