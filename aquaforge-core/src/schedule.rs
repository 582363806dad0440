//! Week-by-week operational schedule (ROS) for a 12 week grow-out.

use crate::{
    error::AquaforgeError,
    growth::{add_days, weeks_to_days, weeks_to_gain},
    rounding,
    validation::validate_ros_input,
};
use aquaforge_schemas::{
    schedule::{FeedingPlan, Phase, RosInput, RosResult, RosWeek, WaterChangePlan},
    species::SpeciesProfile,
};

pub const SCHEDULE_WEEKS: u32 = 12;
/// Seed weight assumed at stocking, in grams.
pub const SEED_WEIGHT_G: f64 = 5.0;
/// Daily biomass gain as a fraction of body weight.
const DAILY_GROWTH_FRACTION: f64 = 0.02;

pub fn phase_for_week(week: u32) -> Phase {
    match week {
        0..=3 => Phase::Initial,
        4..=8 => Phase::Growing,
        _ => Phase::Maturing,
    }
}

fn phase_fcr(phase: Phase) -> f64 {
    match phase {
        Phase::Initial => 1.5,
        Phase::Growing => 1.2,
        Phase::Maturing => 1.5,
    }
}

fn feeding_frequency(phase: Phase) -> u32 {
    match phase {
        Phase::Initial => 4,
        Phase::Growing => 3,
        Phase::Maturing => 2,
    }
}

fn water_change(phase: Phase) -> WaterChangePlan {
    let (times_per_week, percentage) = match phase {
        Phase::Initial => (3, 50.0),
        Phase::Growing => (2, 30.0),
        Phase::Maturing => (1, 20.0),
    };
    WaterChangePlan {
        times_per_week,
        percentage,
    }
}

/// Linear weight curve from the seed weight towards the harvest target.
pub fn average_weight(week: u32, target_harvest_weight: f64) -> f64 {
    SEED_WEIGHT_G + (target_harvest_weight / f64::from(SCHEDULE_WEEKS)) * f64::from(week)
}

fn treatments_for_week(week: u32) -> Vec<String> {
    let mut treatments = Vec::new();
    if week == 1 {
        treatments.push("Add starter probiotic to the first feedings".to_string());
    }
    if week == 4 || week == 8 {
        treatments.push("Preventive disease treatment (salt bath or herbal immunostimulant)".to_string());
    }
    treatments
}

fn biosecurity_for_week(week: u32) -> Vec<String> {
    let mut actions = Vec::new();
    if week == 1 {
        actions.push("Sterilize the pond and equipment before stocking".to_string());
    }
    if week % 2 == 0 {
        actions.push("Monitor water quality: pH, ammonia and dissolved oxygen".to_string());
    }
    actions
}

/// Builds the 12 week schedule and totals the feed it calls for.
///
/// # Errors
///
/// Returns `InvalidInput` for a non-positive population, area or target weight.
pub fn generate_schedule(
    input: &RosInput,
    profile: &SpeciesProfile,
) -> Result<RosResult, AquaforgeError> {
    validate_ros_input(input)?;

    let mut weeks = Vec::with_capacity(SCHEDULE_WEEKS as usize);
    let mut total_feed_required = 0.0;

    for week in 1..=SCHEDULE_WEEKS {
        let phase = phase_for_week(week);
        let avg_weight = average_weight(week, input.target_harvest_weight);

        let daily_gain_per_fish_g = avg_weight * DAILY_GROWTH_FRACTION;
        let daily_gain_kg = input.total_fish * daily_gain_per_fish_g / 1000.0;
        let fcr = phase_fcr(phase);
        let daily_feed_kg = daily_gain_kg * fcr;
        let weekly_feed_kg = daily_feed_kg * 7.0;
        total_feed_required += weekly_feed_kg;

        weeks.push(RosWeek {
            week,
            phase,
            average_weight: rounding::round_to(avg_weight, 1),
            feeding: FeedingPlan {
                frequency_per_day: feeding_frequency(phase),
                daily_amount_kg: rounding::kg(daily_feed_kg),
                total_per_week_kg: rounding::kg(weekly_feed_kg),
                fcr,
            },
            water_change: water_change(phase),
            treatments: treatments_for_week(week),
            biosecurity: biosecurity_for_week(week),
        });
    }

    let weeks_to_size = weeks_to_gain(
        input.target_harvest_weight - SEED_WEIGHT_G,
        profile.weekly_growth_grams,
    )?;
    let estimated_harvest_date = add_days(input.start_date, weeks_to_days(weeks_to_size)?)?;

    Ok(RosResult {
        weeks,
        total_feed_required: rounding::kg(total_feed_required),
        estimated_harvest_date,
        estimated_time_to_proper_size: weeks_to_size,
        stocking_density: rounding::round_to(input.total_fish / input.surface_area, 2),
        meets_target_date: input
            .target_harvest_date
            .map(|target| estimated_harvest_date <= target),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::species::SpeciesCatalog;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    fn input() -> RosInput {
        RosInput {
            species: "lele".to_string(),
            total_fish: 1000.0,
            surface_area: 20.0,
            target_harvest_weight: 120.0,
            start_date: NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
            target_harvest_date: Some(NaiveDate::from_ymd_opt(2026, 3, 20).unwrap()),
        }
    }

    #[test]
    fn twelve_weeks_in_three_phases() {
        let catalog = SpeciesCatalog::builtin();
        let result = generate_schedule(&input(), catalog.get("lele").unwrap()).unwrap();

        assert_eq!(result.weeks.len(), 12);
        let phases: Vec<Phase> = result.weeks.iter().map(|w| w.phase).collect();
        assert!(phases[..3].iter().all(|p| *p == Phase::Initial));
        assert!(phases[3..8].iter().all(|p| *p == Phase::Growing));
        assert!(phases[8..].iter().all(|p| *p == Phase::Maturing));

        let week4 = &result.weeks[3];
        assert_eq!(week4.feeding.frequency_per_day, 3);
        assert_eq!(week4.water_change.times_per_week, 2);
        assert_eq!(week4.water_change.percentage, 30.0);
    }

    #[test]
    fn feed_follows_linear_weight_curve() {
        let catalog = SpeciesCatalog::builtin();
        let result = generate_schedule(&input(), catalog.get("lele").unwrap()).unwrap();

        // week 1: 15 g average, 0.3 kg/day gain, fcr 1.5
        assert_relative_eq!(result.weeks[0].feeding.daily_amount_kg, 0.45);
        assert_relative_eq!(result.weeks[0].feeding.total_per_week_kg, 3.15);
        assert_relative_eq!(result.total_feed_required, 162.75);
        assert_relative_eq!(result.stocking_density, 50.0);
    }

    #[test]
    fn treatments_and_biosecurity_land_on_the_right_weeks() {
        let catalog = SpeciesCatalog::builtin();
        let result = generate_schedule(&input(), catalog.get("lele").unwrap()).unwrap();

        assert_eq!(result.weeks[0].treatments.len(), 1);
        assert_eq!(result.weeks[0].biosecurity.len(), 1);
        assert!(result.weeks[0].biosecurity[0].contains("Sterilize"));
        assert!(result.weeks[3].treatments[0].starts_with("Preventive"));
        assert!(result.weeks[7].treatments[0].starts_with("Preventive"));
        assert!(result.weeks[5].treatments.is_empty());
        for week in &result.weeks {
            let monitored = week.biosecurity.iter().any(|b| b.contains("water quality"));
            assert_eq!(monitored, week.week % 2 == 0, "week {}", week.week);
        }
    }

    #[test]
    fn harvest_date_uses_shared_growth_rate() {
        let catalog = SpeciesCatalog::builtin();
        let result = generate_schedule(&input(), catalog.get("lele").unwrap()).unwrap();

        // 115 g at 10 g/week
        assert_eq!(result.estimated_time_to_proper_size, 12);
        assert_eq!(result.estimated_harvest_date, NaiveDate::from_ymd_opt(2026, 3, 30).unwrap());
        assert_eq!(result.meets_target_date, Some(false));
    }

    #[test]
    fn empty_pond_is_rejected() {
        let catalog = SpeciesCatalog::builtin();
        let mut bad = input();
        bad.total_fish = 0.0;
        assert!(generate_schedule(&bad, catalog.get("lele").unwrap()).is_err());
    }

    #[test]
    fn oversized_harvest_weight_is_an_error() {
        let catalog = SpeciesCatalog::builtin();
        let mut huge = input();
        huge.target_harvest_weight = 1.0e12;
        let err = generate_schedule(&huge, catalog.get("lele").unwrap()).unwrap_err();
        assert!(matches!(err, AquaforgeError::InvalidInput { .. }));
    }
}
