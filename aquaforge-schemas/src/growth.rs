use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedQuality {
    Standard,
    Premium,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

/// Inputs for an estimated-time-to-harvest calculation. Weights are in grams.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EtpInput {
    pub species: String,
    pub starting_weight: f64,
    pub target_weight: f64,
    pub start_date: NaiveDate,
    /// Average pond water temperature in °C.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub water_temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feed_quality: Option<FeedQuality>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EtpResult {
    pub estimated_days: u32,
    pub estimated_weeks: u32,
    pub estimated_date: NaiveDate,
    pub confidence: Confidence,
    /// Weekly growth in grams after temperature and feed adjustments.
    pub adjusted_weekly_growth: f64,
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarvestWindow {
    pub earliest: NaiveDate,
    pub optimal: NaiveDate,
    pub latest: NaiveDate,
}
