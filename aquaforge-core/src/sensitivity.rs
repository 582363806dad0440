//! One-at-a-time sensitivity of the moderate-scenario ROI, with a plain
//! language summary for the farmer.

use crate::{
    roi::{calculate_roi, scenario, three_scenarios},
    rounding,
};
use aquaforge_schemas::roi::{
    Impact, RoiParameters, RoiResult, ScenarioKind, Sensitivity, SensitivityParameter,
    SensitivityReport,
};
use std::cmp::Ordering;

const PERTURBATION: f64 = 0.10;
const HIGH_IMPACT_DELTA: f64 = 5.0;
const MEDIUM_IMPACT_DELTA: f64 = 2.0;
const FEED_DOMINANCE_PERCENT: f64 = 50.0;
const GOOD_ROI_PERCENT: f64 = 30.0;
const ACCEPTABLE_ROI_PERCENT: f64 = 15.0;
const MAIN_DRIVER_COUNT: usize = 3;

/// Moves one parameter 10% in the direction that helps the farmer.
pub fn perturb_favorably(base: &RoiParameters, parameter: SensitivityParameter) -> RoiParameters {
    let mut params = base.clone();
    match parameter {
        SensitivityParameter::Sr => params.sr *= 1.0 + PERTURBATION,
        SensitivityParameter::Fcr => params.fcr *= 1.0 - PERTURBATION,
        SensitivityParameter::FeedPricePerKg => params.feed_price_per_kg *= 1.0 - PERTURBATION,
        SensitivityParameter::SellingPricePerKg => params.selling_price_per_kg *= 1.0 + PERTURBATION,
    }
    params
}

pub fn classify_impact(delta_roi: f64) -> Impact {
    let magnitude = delta_roi.abs();
    if magnitude > HIGH_IMPACT_DELTA {
        Impact::High
    } else if magnitude > MEDIUM_IMPACT_DELTA {
        Impact::Medium
    } else {
        Impact::Low
    }
}

pub fn roi_band(roi_percent: f64) -> &'static str {
    if roi_percent > GOOD_ROI_PERCENT {
        "good"
    } else if roi_percent > ACCEPTABLE_ROI_PERCENT {
        "acceptable"
    } else {
        "risky"
    }
}

/// Ranks the tracked parameters by how far a favorable 10% move shifts ROI.
pub fn analyze(base: &RoiParameters) -> SensitivityReport {
    let scenarios = three_scenarios(base);
    let base_roi = scenarios.moderate.roi_percent;

    let mut sensitivities: Vec<Sensitivity> = SensitivityParameter::ALL
        .iter()
        .map(|&parameter| {
            let perturbed = scenario(&perturb_favorably(base, parameter), ScenarioKind::Moderate);
            let delta_roi = rounding::percent(perturbed.roi_percent - base_roi);
            Sensitivity {
                parameter,
                delta_roi,
                impact: classify_impact(delta_roi),
            }
        })
        .collect();

    sensitivities.sort_by(|a, b| {
        b.delta_roi
            .abs()
            .partial_cmp(&a.delta_roi.abs())
            .unwrap_or(Ordering::Equal)
    });

    let main_drivers: Vec<SensitivityParameter> = sensitivities
        .iter()
        .take(MAIN_DRIVER_COUNT)
        .map(|s| s.parameter)
        .collect();

    let summary = summarize(base, &scenarios.moderate, &main_drivers);

    SensitivityReport {
        scenarios,
        sensitivities,
        main_drivers,
        summary,
    }
}

fn summarize(base: &RoiParameters, moderate: &RoiResult, drivers: &[SensitivityParameter]) -> String {
    let mut sentences = Vec::new();

    let feed_share = if moderate.total_cost > 0.0 {
        moderate.feed_cost / moderate.total_cost * 100.0
    } else {
        0.0
    };
    if feed_share > FEED_DOMINANCE_PERCENT {
        sentences.push(format!(
            "Feed is the dominant cost at {:.1}% of total cost, so FCR and feed price matter most.",
            feed_share
        ));
    } else {
        sentences.push(format!(
            "Feed makes up {:.1}% of total cost; seed and fixed costs weigh heavily as well.",
            feed_share
        ));
    }

    sentences.push(format!(
        "Break-even selling price is {} per kg against a planned {} per kg.",
        group_thousands(moderate.bep_per_kg),
        group_thousands(base.selling_price_per_kg)
    ));

    sentences.push(format!(
        "Moderate-scenario ROI is {:.2}%, which is {}.",
        moderate.roi_percent,
        roi_band(moderate.roi_percent)
    ));

    let safe = calculate_roi(&RoiParameters {
        sr: base.sr * 0.9,
        selling_price_per_kg: base.selling_price_per_kg * 0.9,
        ..base.clone()
    });
    sentences.push(format!(
        "If survival falls to {:.1}% and the selling price to {} per kg, ROI would be {:.2}%.",
        base.sr * 0.9 * 100.0,
        group_thousands(base.selling_price_per_kg * 0.9),
        safe.roi_percent
    ));

    if !drivers.is_empty() {
        let names: Vec<&str> = drivers.iter().map(|d| d.label()).collect();
        let list = match names.split_last() {
            Some((last, rest)) if !rest.is_empty() => format!("{} and {}", rest.join(", "), last),
            _ => names.join(""),
        };
        sentences.push(format!("ROI is most sensitive to {}.", list));
    }

    sentences.join(" ")
}

/// Formats a whole currency amount with `,` separators.
pub fn group_thousands(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0.0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roi::tests::catfish_params;
    use approx::assert_relative_eq;

    #[test]
    fn selling_price_drives_the_catfish_cycle() {
        let report = analyze(&catfish_params());

        assert_eq!(report.sensitivities.len(), 4);
        assert_eq!(report.main_drivers.len(), 3);
        assert_eq!(report.main_drivers[0], SensitivityParameter::SellingPricePerKg);
        assert_eq!(report.main_drivers[1], SensitivityParameter::Sr);

        let selling = &report.sensitivities[0];
        assert_relative_eq!(selling.delta_roi, 7.24, epsilon = 1e-9);
        assert_eq!(selling.impact, Impact::High);
        assert_eq!(report.sensitivities[1].impact, Impact::Medium);
    }

    #[test]
    fn sensitivities_are_sorted_by_magnitude() {
        let report = analyze(&catfish_params());
        for pair in report.sensitivities.windows(2) {
            assert!(pair[0].delta_roi.abs() >= pair[1].delta_roi.abs());
        }
        assert!(report.sensitivities.iter().all(|s| s.delta_roi > 0.0));
    }

    #[test]
    fn losing_cycle_is_called_risky() {
        let report = analyze(&catfish_params());
        assert!(report.summary.contains("risky"));
        assert!(report.summary.contains("38,690"));
        assert!(report.summary.contains("selling price"));
        assert!(!report.summary.contains("dominant"));
    }

    #[test]
    fn feed_heavy_profitable_cycle() {
        let params = RoiParameters {
            stocking_density: 100.0,
            surface_area: 100.0,
            sr: 0.9,
            fcr: 1.0,
            feed_price_per_kg: 10_000.0,
            seed_price_per_fish: 200.0,
            selling_price_per_kg: 25_000.0,
            average_weight_at_harvest: 150.0,
            other_costs: 0.0,
            freight_cost: 0.0,
        };
        let report = analyze(&params);
        assert!(report.summary.contains("dominant"));
        assert!(report.summary.contains("good"));
    }

    #[test]
    fn impact_thresholds() {
        assert_eq!(classify_impact(-6.0), Impact::High);
        assert_eq!(classify_impact(5.0), Impact::Medium);
        assert_eq!(classify_impact(2.0), Impact::Low);
        assert_eq!(roi_band(30.0), "acceptable");
        assert_eq!(roi_band(15.0), "risky");
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(group_thousands(3_946_400.0), "3,946,400");
        assert_eq!(group_thousands(-1_090_400.0), "-1,090,400");
        assert_eq!(group_thousands(950.0), "950");
    }
}
