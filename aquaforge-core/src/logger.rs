use aquaforge_schemas::{
    roi::{ScenarioKind, ScenarioSet},
    schedule::RosWeek,
};
use crate::error::AquaforgeError;
use csv::Writer;
use serde::{Deserialize, Serialize};
use std::fs;

/// One row of `schedule.csv`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleLogEntry {
    pub week: u32,
    pub phase: String,
    pub average_weight_g: f64,
    pub feeding_frequency: u32,
    pub daily_feed_kg: f64,
    pub weekly_feed_kg: f64,
    pub cumulative_feed_kg: f64,
    pub water_changes_per_week: u32,
    pub water_change_percent: f64,
    pub treatments: String,
    pub biosecurity: String,
}

/// One row of `scenarios.csv`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioLogEntry {
    pub scenario: String,
    pub survived_fish: f64,
    pub total_biomass_kg: f64,
    pub total_feed_kg: f64,
    pub total_cost: f64,
    pub revenue: f64,
    pub profit: f64,
    pub roi_percent: f64,
    pub bep_per_kg: f64,
    pub margin_percent: f64,
}

fn open_writer(path: &str) -> Result<Writer<fs::File>, AquaforgeError> {
    Writer::from_path(path).map_err(|e| AquaforgeError::CsvError(path.to_string(), e))
}

#[derive(Debug)]
pub struct ScheduleLogger {
    path: String,
    writer: Writer<fs::File>,
    cumulative_feed_kg: f64,
}

impl ScheduleLogger {
    pub fn new(path: &str) -> Result<Self, AquaforgeError> {
        Ok(Self {
            path: path.to_string(),
            writer: open_writer(path)?,
            cumulative_feed_kg: 0.0,
        })
    }

    /// Truncates the file and zeroes the running feed total so the next
    /// schedule replaces the previous one.
    pub fn reset(&mut self) -> Result<(), AquaforgeError> {
        self.writer = open_writer(&self.path)?;
        self.cumulative_feed_kg = 0.0;
        Ok(())
    }

    pub fn log_week(&mut self, week: &RosWeek) -> Result<(), AquaforgeError> {
        self.cumulative_feed_kg += week.feeding.total_per_week_kg;

        let entry = ScheduleLogEntry {
            week: week.week,
            phase: week.phase.to_string(),
            average_weight_g: week.average_weight,
            feeding_frequency: week.feeding.frequency_per_day,
            daily_feed_kg: week.feeding.daily_amount_kg,
            weekly_feed_kg: week.feeding.total_per_week_kg,
            cumulative_feed_kg: crate::rounding::kg(self.cumulative_feed_kg),
            water_changes_per_week: week.water_change.times_per_week,
            water_change_percent: week.water_change.percentage,
            treatments: week.treatments.join("; "),
            biosecurity: week.biosecurity.join("; "),
        };

        self.writer
            .serialize(entry)
            .map_err(|e| AquaforgeError::CsvError(self.path.clone(), e))?;
        self.writer
            .flush()
            .map_err(|e| AquaforgeError::FileIO(self.path.clone(), e))?;
        Ok(())
    }
}

pub fn write_scenarios_csv(path: &str, scenarios: &ScenarioSet) -> Result<(), AquaforgeError> {
    let mut writer = open_writer(path)?;
    for kind in ScenarioKind::ALL {
        let result = scenarios.get(kind);
        writer.serialize(ScenarioLogEntry {
            scenario: kind.to_string(),
            survived_fish: result.survived_fish,
            total_biomass_kg: result.total_biomass_kg,
            total_feed_kg: result.total_feed_kg,
            total_cost: result.total_cost,
            revenue: result.revenue,
            profit: result.profit,
            roi_percent: result.roi_percent,
            bep_per_kg: result.bep_per_kg,
            margin_percent: result.margin_percent,
        })
        .map_err(|e| AquaforgeError::CsvError(path.to_string(), e))?;
    }
    writer
        .flush()
        .map_err(|e| AquaforgeError::FileIO(path.to_string(), e))?;
    Ok(())
}
