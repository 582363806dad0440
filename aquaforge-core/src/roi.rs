//! ROI scenario engine: cost, revenue and return for one grow-out cycle under
//! three fixed market scenarios.

use crate::rounding;
use aquaforge_schemas::roi::{
    RoiParameters, RoiResult, ScenarioAdjustment, ScenarioKind, ScenarioSet,
};

/// The fixed multipliers for each scenario.
pub fn scenario_adjustment(kind: ScenarioKind) -> ScenarioAdjustment {
    let (sr, fcr, selling_price, feed_price) = match kind {
        ScenarioKind::Conservative => (0.9, 1.1, 0.9, 1.05),
        ScenarioKind::Moderate => (1.0, 1.0, 1.0, 1.0),
        ScenarioKind::Aggressive => (1.1, 0.9, 1.1, 0.95),
    };
    ScenarioAdjustment {
        kind,
        sr,
        fcr,
        selling_price,
        feed_price,
    }
}

/// Applies `adjustment` to `params`. Survival is capped at 100%.
pub fn apply_scenario(params: &RoiParameters, adjustment: &ScenarioAdjustment) -> RoiParameters {
    RoiParameters {
        sr: (params.sr * adjustment.sr).min(1.0),
        fcr: params.fcr * adjustment.fcr,
        selling_price_per_kg: params.selling_price_per_kg * adjustment.selling_price,
        feed_price_per_kg: params.feed_price_per_kg * adjustment.feed_price,
        ..params.clone()
    }
}

/// Core cycle economics. Total over any finite input; zero denominators yield 0.
pub fn calculate_roi(params: &RoiParameters) -> RoiResult {
    let total_fish = params.stocking_density * params.surface_area;
    // tolerance keeps 764.999... from a scaled survival rate at 765
    let survived_fish = (total_fish * params.sr + 1e-9).floor().clamp(0.0, total_fish.max(0.0));
    let total_biomass_kg = survived_fish * params.average_weight_at_harvest / 1000.0;
    let total_feed_kg = total_biomass_kg * params.fcr;

    let seed_cost = total_fish * params.seed_price_per_fish;
    let feed_cost = total_feed_kg * params.feed_price_per_kg;
    let total_cost = seed_cost + feed_cost + params.other_costs + params.freight_cost;
    let revenue = total_biomass_kg * params.selling_price_per_kg;
    let profit = revenue - total_cost;

    let roi_percent = if total_cost > 0.0 { profit / total_cost * 100.0 } else { 0.0 };
    let bep_per_kg = if total_biomass_kg > 0.0 { total_cost / total_biomass_kg } else { 0.0 };
    let margin_percent = if revenue > 0.0 { profit / revenue * 100.0 } else { 0.0 };

    RoiResult {
        total_fish,
        survived_fish,
        total_biomass_kg: rounding::kg(total_biomass_kg),
        total_feed_kg: rounding::kg(total_feed_kg),
        feed_cost: rounding::money(feed_cost),
        total_cost: rounding::money(total_cost),
        revenue: rounding::money(revenue),
        profit: rounding::money(profit),
        roi_percent: rounding::percent(roi_percent),
        bep_per_kg: rounding::money(bep_per_kg),
        margin_percent: rounding::percent(margin_percent),
    }
}

pub fn scenario(params: &RoiParameters, kind: ScenarioKind) -> RoiResult {
    calculate_roi(&apply_scenario(params, &scenario_adjustment(kind)))
}

pub fn three_scenarios(params: &RoiParameters) -> ScenarioSet {
    ScenarioSet {
        conservative: scenario(params, ScenarioKind::Conservative),
        moderate: scenario(params, ScenarioKind::Moderate),
        aggressive: scenario(params, ScenarioKind::Aggressive),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use approx::assert_relative_eq;

    pub(crate) fn catfish_params() -> RoiParameters {
        RoiParameters {
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
        }
    }

    #[test]
    fn moderate_catfish_cycle_loses_money() {
        let result = scenario(&catfish_params(), ScenarioKind::Moderate);

        assert_eq!(result.total_fish, 1000.0);
        assert_eq!(result.survived_fish, 850.0);
        assert_relative_eq!(result.total_biomass_kg, 102.0);
        assert_relative_eq!(result.total_feed_kg, 122.4);
        assert_eq!(result.feed_cost, 1_346_400.0);
        assert_eq!(result.total_cost, 3_946_400.0);
        assert_eq!(result.revenue, 2_856_000.0);
        assert_eq!(result.profit, -1_090_400.0);
        assert_relative_eq!(result.roi_percent, -27.63);
        assert_eq!(result.bep_per_kg, 38_690.0);
    }

    #[test]
    fn scenarios_are_ordered() {
        let set = three_scenarios(&catfish_params());
        assert!(set.aggressive.roi_percent >= set.moderate.roi_percent);
        assert!(set.moderate.roi_percent >= set.conservative.roi_percent);
        assert!(set.aggressive.profit > set.conservative.profit);
    }

    #[test]
    fn conservative_survival_is_not_truncated_by_float_error() {
        let result = scenario(&catfish_params(), ScenarioKind::Conservative);
        assert_eq!(result.survived_fish, 765.0);
    }

    #[test]
    fn scenarios_are_deterministic() {
        let params = catfish_params();
        assert_eq!(three_scenarios(&params), three_scenarios(&params));
    }

    #[test]
    fn aggressive_survival_never_exceeds_stock() {
        let mut params = catfish_params();
        params.sr = 0.97;
        let result = scenario(&params, ScenarioKind::Aggressive);
        assert_eq!(result.survived_fish, result.total_fish);
        assert!(result.total_biomass_kg >= 0.0);
    }

    #[test]
    fn zero_cost_yields_zero_roi() {
        let params = RoiParameters {
            feed_price_per_kg: 0.0,
            seed_price_per_fish: 0.0,
            other_costs: 0.0,
            freight_cost: 0.0,
            ..catfish_params()
        };
        let result = calculate_roi(&params);
        assert_eq!(result.total_cost, 0.0);
        assert_eq!(result.roi_percent, 0.0);
        assert!(result.roi_percent.is_finite());
        assert_eq!(result.bep_per_kg, 0.0);
    }

    #[test]
    fn no_harvest_yields_zero_break_even() {
        let params = RoiParameters {
            sr: 0.0,
            ..catfish_params()
        };
        let result = calculate_roi(&params);
        assert_eq!(result.total_biomass_kg, 0.0);
        assert_eq!(result.bep_per_kg, 0.0);
        assert_eq!(result.margin_percent, 0.0);
    }
}
