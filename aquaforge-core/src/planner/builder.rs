use crate::{
    error::AquaforgeError,
    growth::DEFAULT_HARVEST_FLEX_DAYS,
    logger::ScheduleLogger,
    planner::engine::FarmPlanner,
    pricing::validate_price_model,
    species::{SpeciesCatalog, UnknownSpeciesPolicy},
};
use aquaforge_schemas::{
    growth::EtpInput, pond::PondSpec, pricing::PriceModel, roi::RoiParameters,
};
use chrono::{DateTime, NaiveDate, Utc};

/// A fluent builder for constructing a `FarmPlanner`.
///
/// The pond, growth inputs and ROI parameters are required. The species
/// catalog defaults to the built-in table and unknown species are rejected
/// unless a fallback policy is set.
#[derive(Default)]
pub struct PlanBuilder {
    catalog: Option<SpeciesCatalog>,
    pond: Option<PondSpec>,
    growth: Option<EtpInput>,
    roi: Option<RoiParameters>,
    price_model: Option<PriceModel>,
    index_price: Option<f64>,
    target_harvest_date: Option<NaiveDate>,
    unknown_species: UnknownSpeciesPolicy,
    harvest_flex_days: Option<u32>,
    as_of: Option<DateTime<Utc>>,
    log_path: Option<String>,
}

impl PlanBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalog(mut self, catalog: SpeciesCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn with_pond(mut self, pond: PondSpec) -> Self {
        self.pond = Some(pond);
        self
    }

    /// Growth inputs. The species is taken from the pond.
    pub fn with_growth(mut self, growth: EtpInput) -> Self {
        self.growth = Some(growth);
        self
    }

    /// Base economics. Density, area and harvest weight are overridden by the
    /// pond and growth inputs so every stage plans the same stock.
    pub fn with_roi(mut self, roi: RoiParameters) -> Self {
        self.roi = Some(roi);
        self
    }

    pub fn with_price_model(mut self, model: PriceModel) -> Self {
        self.price_model = Some(model);
        self
    }

    /// Market index used by indexed price agreements.
    pub fn with_index_price(mut self, price_per_kg: f64) -> Self {
        self.index_price = Some(price_per_kg);
        self
    }

    pub fn with_target_harvest_date(mut self, date: NaiveDate) -> Self {
        self.target_harvest_date = Some(date);
        self
    }

    pub fn with_unknown_species(mut self, policy: UnknownSpeciesPolicy) -> Self {
        self.unknown_species = policy;
        self
    }

    pub fn with_harvest_flex_days(mut self, days: u32) -> Self {
        self.harvest_flex_days = Some(days);
        self
    }

    /// Pins the instant price agreements are checked against. Without it the
    /// clock is read when the planner runs.
    pub fn with_clock(mut self, as_of: DateTime<Utc>) -> Self {
        self.as_of = Some(as_of);
        self
    }

    /// Configures the planner to write the weekly schedule to the specified CSV file.
    pub fn with_schedule_logging_to_file(mut self, path: &str) -> Self {
        self.log_path = Some(path.to_string());
        self
    }

    /// Consumes the builder and returns a fully configured `FarmPlanner`.
    ///
    /// # Errors
    ///
    /// Returns an `AquaforgeError` if the pond, growth inputs or ROI parameters
    /// are missing, the price agreement is malformed, or the log file cannot be
    /// created.
    pub fn build(self) -> Result<FarmPlanner, AquaforgeError> {
        let pond = self.pond.ok_or(AquaforgeError::PondNotDefined)?;
        let growth = self
            .growth
            .ok_or_else(|| AquaforgeError::ConfigError("growth inputs are missing".to_string()))?;
        let roi = self.roi.ok_or(AquaforgeError::RoiNotDefined)?;

        if let Some(model) = &self.price_model {
            validate_price_model(model)?;
        }

        let logger = match self.log_path {
            Some(path) => Some(ScheduleLogger::new(&path)?),
            None => None,
        };

        Ok(FarmPlanner {
            catalog: self.catalog.unwrap_or_else(SpeciesCatalog::builtin),
            pond,
            growth,
            roi,
            price_model: self.price_model,
            index_price: self.index_price,
            target_harvest_date: self.target_harvest_date,
            unknown_species: self.unknown_species,
            harvest_flex_days: self.harvest_flex_days.unwrap_or(DEFAULT_HARVEST_FLEX_DAYS),
            as_of: self.as_of,
            logger,
        })
    }
}
