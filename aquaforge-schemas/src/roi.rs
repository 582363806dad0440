use serde::{Deserialize, Serialize};
use std::fmt;

/// Base economic inputs for one grow-out cycle. All money is in one currency unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiParameters {
    /// Fish per square metre.
    pub stocking_density: f64,
    /// Square metres.
    pub surface_area: f64,
    /// Survival rate, 0 to 1.
    pub sr: f64,
    /// Feed conversion ratio (kg feed per kg biomass).
    pub fcr: f64,
    pub feed_price_per_kg: f64,
    pub seed_price_per_fish: f64,
    pub selling_price_per_kg: f64,
    /// Grams per fish.
    pub average_weight_at_harvest: f64,
    pub other_costs: f64,
    pub freight_cost: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioKind {
    Conservative,
    Moderate,
    Aggressive,
}

impl ScenarioKind {
    pub const ALL: [ScenarioKind; 3] = [
        ScenarioKind::Conservative,
        ScenarioKind::Moderate,
        ScenarioKind::Aggressive,
    ];
}

impl fmt::Display for ScenarioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScenarioKind::Conservative => "conservative",
            ScenarioKind::Moderate => "moderate",
            ScenarioKind::Aggressive => "aggressive",
        };
        f.pad(name)
    }
}

/// Multipliers applied to the base parameters for a named scenario.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioAdjustment {
    pub kind: ScenarioKind,
    pub sr: f64,
    pub fcr: f64,
    pub selling_price: f64,
    pub feed_price: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RoiResult {
    pub total_fish: f64,
    pub survived_fish: f64,
    pub total_biomass_kg: f64,
    pub total_feed_kg: f64,
    pub feed_cost: f64,
    pub total_cost: f64,
    pub revenue: f64,
    pub profit: f64,
    pub roi_percent: f64,
    pub bep_per_kg: f64,
    pub margin_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioSet {
    pub conservative: RoiResult,
    pub moderate: RoiResult,
    pub aggressive: RoiResult,
}

impl ScenarioSet {
    pub fn get(&self, kind: ScenarioKind) -> &RoiResult {
        match kind {
            ScenarioKind::Conservative => &self.conservative,
            ScenarioKind::Moderate => &self.moderate,
            ScenarioKind::Aggressive => &self.aggressive,
        }
    }
}

/// Parameters tracked by the sensitivity analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensitivityParameter {
    Sr,
    Fcr,
    FeedPricePerKg,
    SellingPricePerKg,
}

impl SensitivityParameter {
    pub const ALL: [SensitivityParameter; 4] = [
        SensitivityParameter::Sr,
        SensitivityParameter::Fcr,
        SensitivityParameter::FeedPricePerKg,
        SensitivityParameter::SellingPricePerKg,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SensitivityParameter::Sr => "survival rate",
            SensitivityParameter::Fcr => "feed conversion ratio",
            SensitivityParameter::FeedPricePerKg => "feed price",
            SensitivityParameter::SellingPricePerKg => "selling price",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Impact {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sensitivity {
    pub parameter: SensitivityParameter,
    /// ROI percentage points gained relative to the moderate scenario.
    pub delta_roi: f64,
    pub impact: Impact,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivityReport {
    pub scenarios: ScenarioSet,
    pub sensitivities: Vec<Sensitivity>,
    pub main_drivers: Vec<SensitivityParameter>,
    pub summary: String,
}
