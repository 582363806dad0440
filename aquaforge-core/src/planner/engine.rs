use super::report::{PlanReport, PriceSource};
use crate::{
    error::AquaforgeError,
    growth::{estimate_time_to_harvest, harvest_window},
    logger::ScheduleLogger,
    pricing::{effective_price, is_valid_at},
    schedule::generate_schedule,
    sensitivity::analyze,
    species::{SpeciesCatalog, UnknownSpeciesPolicy},
    validation::{validate_pond, validate_roi_parameters},
};
use aquaforge_schemas::{
    growth::EtpInput,
    pond::PondSpec,
    pricing::PriceModel,
    roi::RoiParameters,
    schedule::RosInput,
};
use chrono::{DateTime, NaiveDate, Utc};

/// Runs the calculators in order: pond validation, growth estimate,
/// operational schedule, ROI scenarios and sensitivity.
pub struct FarmPlanner {
    pub(super) catalog: SpeciesCatalog,
    pub(super) pond: PondSpec,
    pub(super) growth: EtpInput,
    pub(super) roi: RoiParameters,
    pub(super) price_model: Option<PriceModel>,
    pub(super) index_price: Option<f64>,
    pub(super) target_harvest_date: Option<NaiveDate>,
    pub(super) unknown_species: UnknownSpeciesPolicy,
    pub(super) harvest_flex_days: u32,
    pub(super) as_of: Option<DateTime<Utc>>,
    pub(super) logger: Option<ScheduleLogger>,
}

impl FarmPlanner {
    pub fn run(&mut self) -> Result<PlanReport, AquaforgeError> {
        let mut notes = Vec::new();

        println!("--- [Planner] Validating pond ---");
        let species = self.pond.species.clone();
        let validation = validate_pond(&self.pond, self.catalog.get(&species));
        for warning in &validation.warnings {
            println!("  warning: {}", warning);
        }
        if !validation.is_valid {
            return Err(AquaforgeError::InvalidPond(validation.errors));
        }

        let profile = self.catalog.resolve(&species, &self.unknown_species)?.clone();
        if self.catalog.get(&species).is_none() {
            notes.push(format!(
                "No growth profile for '{}'; planned with the '{}' profile",
                species, profile.species_id
            ));
        }

        println!("--- [Planner] Estimating time to harvest ---");
        let growth_input = EtpInput {
            species: species.clone(),
            ..self.growth.clone()
        };
        let growth = estimate_time_to_harvest(&growth_input, &profile)?;
        let window = harvest_window(&growth, self.harvest_flex_days);
        println!(
            "  {} weeks to {} g, harvest around {}",
            growth.estimated_weeks, growth_input.target_weight, growth.estimated_date
        );

        println!("--- [Planner] Generating operational schedule ---");
        let schedule_input = RosInput {
            species: species.clone(),
            total_fish: self.pond.total_fish(),
            surface_area: self.pond.surface_area(),
            target_harvest_weight: growth_input.target_weight,
            start_date: growth_input.start_date,
            target_harvest_date: self.target_harvest_date,
        };
        let schedule = generate_schedule(&schedule_input, &profile)?;
        if let Some(logger) = &mut self.logger {
            logger.reset()?;
            for week in &schedule.weeks {
                logger.log_week(week)?;
            }
        }
        if schedule.meets_target_date == Some(false) {
            notes.push(format!(
                "Estimated harvest {} falls after the target date",
                schedule.estimated_harvest_date
            ));
        }

        println!("--- [Planner] Running ROI scenarios ---");
        let mut roi_parameters = RoiParameters {
            stocking_density: self.pond.stocking_density,
            surface_area: self.pond.surface_area(),
            average_weight_at_harvest: growth_input.target_weight,
            ..self.roi.clone()
        };
        let price_source = self.apply_price_model(&mut roi_parameters);
        if let PriceSource::ExpiredAgreement { kind } = &price_source {
            notes.push(format!(
                "The {} price agreement is not valid today; using the planned selling price",
                kind
            ));
        }
        validate_roi_parameters(&roi_parameters)?;

        let sensitivity = analyze(&roi_parameters);
        println!(
            "  moderate ROI {:.2}%, main drivers: {:?}",
            sensitivity.scenarios.moderate.roi_percent, sensitivity.main_drivers
        );

        println!("Planning Complete.");
        Ok(PlanReport {
            species_id: profile.species_id,
            validation,
            growth,
            harvest_window: window,
            schedule,
            roi_parameters,
            price_source,
            sensitivity,
            notes,
        })
    }

    fn apply_price_model(&self, params: &mut RoiParameters) -> PriceSource {
        let Some(model) = &self.price_model else {
            return PriceSource::Parameters;
        };
        let now = self.as_of.unwrap_or_else(Utc::now);
        if is_valid_at(model, now) {
            let price = effective_price(model, self.index_price);
            params.selling_price_per_kg = price;
            PriceSource::Agreement {
                kind: model.kind_name().to_string(),
                price_per_kg: price,
            }
        } else {
            PriceSource::ExpiredAgreement {
                kind: model.kind_name().to_string(),
            }
        }
    }
}
