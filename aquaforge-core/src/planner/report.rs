use aquaforge_schemas::{
    growth::{EtpResult, HarvestWindow},
    pond::ValidationReport,
    roi::{RoiParameters, SensitivityReport},
    schedule::RosResult,
};
use serde::{Deserialize, Serialize};

/// How the selling price used for the ROI run was chosen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum PriceSource {
    Parameters,
    Agreement { kind: String, price_per_kg: f64 },
    ExpiredAgreement { kind: String },
}

/// Everything one planning run produces, in data-flow order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanReport {
    pub species_id: String,
    pub validation: ValidationReport,
    pub growth: EtpResult,
    pub harvest_window: HarvestWindow,
    pub schedule: RosResult,
    pub roi_parameters: RoiParameters,
    pub price_source: PriceSource,
    pub sensitivity: SensitivityReport,
    pub notes: Vec<String>,
}
