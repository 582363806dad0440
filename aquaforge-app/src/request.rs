use aquaforge_schemas::{
    growth::{EtpInput, FeedQuality},
    pond::PondSpec,
    pricing::PriceModel,
    roi::RoiParameters,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A planning request as written in `request.yaml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
    pub farm_name: String,
    pub pond: PondSpec,
    pub growth: GrowthRequest,
    pub economics: Economics,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_agreement: Option<PriceModel>,
    /// Current market index for indexed agreements, per kg.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index_price_per_kg: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_harvest_date: Option<NaiveDate>,
    /// Species profile to plan with when the pond species is unknown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_species: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthRequest {
    pub starting_weight: f64,
    pub target_weight: f64,
    pub start_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub water_temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feed_quality: Option<FeedQuality>,
}

/// Cycle economics. Stock size and harvest weight come from the pond and growth sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Economics {
    pub sr: f64,
    pub fcr: f64,
    pub feed_price_per_kg: f64,
    pub seed_price_per_fish: f64,
    pub selling_price_per_kg: f64,
    #[serde(default)]
    pub other_costs: f64,
    #[serde(default)]
    pub freight_cost: f64,
}

impl PlanRequest {
    pub fn etp_input(&self) -> EtpInput {
        EtpInput {
            species: self.pond.species.clone(),
            starting_weight: self.growth.starting_weight,
            target_weight: self.growth.target_weight,
            start_date: self.growth.start_date,
            water_temperature: self.growth.water_temperature,
            feed_quality: self.growth.feed_quality,
        }
    }

    pub fn roi_parameters(&self) -> RoiParameters {
        RoiParameters {
            stocking_density: self.pond.stocking_density,
            surface_area: self.pond.surface_area(),
            sr: self.economics.sr,
            fcr: self.economics.fcr,
            feed_price_per_kg: self.economics.feed_price_per_kg,
            seed_price_per_fish: self.economics.seed_price_per_fish,
            selling_price_per_kg: self.economics.selling_price_per_kg,
            average_weight_at_harvest: self.growth.target_weight,
            other_costs: self.economics.other_costs,
            freight_cost: self.economics.freight_cost,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_request_yaml() {
        let yaml = r#"
farm_name: Test farm
pond: { pond_type: terpal, length: 5.0, width: 4.0, depth: 1.0, stocking_density: 50.0, species: lele }
growth: { starting_weight: 5.0, target_weight: 120.0, start_date: 2026-11-02 }
economics:
  sr: 0.85
  fcr: 1.2
  feed_price_per_kg: 11000
  seed_price_per_fish: 300
  selling_price_per_kg: 28000
price_agreement:
  type: fixed
  price_per_kg: 27500
  valid_from: 2026-11-01T00:00:00Z
  valid_to: 2027-03-01T00:00:00Z
"#;
        let request: PlanRequest = serde_yaml::from_str(yaml).unwrap();
        let roi = request.roi_parameters();
        assert_eq!(roi.surface_area, 20.0);
        assert_eq!(roi.average_weight_at_harvest, 120.0);
        assert_eq!(roi.other_costs, 0.0);
        assert!(matches!(request.price_agreement, Some(PriceModel::Fixed { .. })));
        assert_eq!(request.etp_input().species, "lele");
    }
}
