use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Grow-out phase of a schedule week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Initial,
    Growing,
    Maturing,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Initial => "initial",
            Phase::Growing => "growing",
            Phase::Maturing => "maturing",
        };
        f.pad(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosInput {
    pub species: String,
    pub total_fish: f64,
    /// Square metres.
    pub surface_area: f64,
    /// Grams per fish at harvest.
    pub target_harvest_weight: f64,
    pub start_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_harvest_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedingPlan {
    pub frequency_per_day: u32,
    pub daily_amount_kg: f64,
    pub total_per_week_kg: f64,
    pub fcr: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterChangePlan {
    pub times_per_week: u32,
    /// Share of pond volume replaced per change, in percent.
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosWeek {
    pub week: u32,
    pub phase: Phase,
    /// Grams per fish.
    pub average_weight: f64,
    pub feeding: FeedingPlan,
    pub water_change: WaterChangePlan,
    pub treatments: Vec<String>,
    pub biosecurity: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosResult {
    pub weeks: Vec<RosWeek>,
    pub total_feed_required: f64,
    pub estimated_harvest_date: NaiveDate,
    /// Weeks from stocking until the target weight is reached.
    pub estimated_time_to_proper_size: u32,
    /// Fish per square metre implied by the input population.
    pub stocking_density: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meets_target_date: Option<bool>,
}
