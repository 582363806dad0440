//! Estimated time to harvest (ETP) from a linear weekly growth model.

use crate::{error::AquaforgeError, validation::validate_etp_input};
use aquaforge_schemas::{
    growth::{Confidence, EtpInput, EtpResult, FeedQuality, HarvestWindow},
    species::SpeciesProfile,
};
use chrono::{Days, NaiveDate};

pub const TOLERATED_TEMPERATURE_C: (f64, f64) = (24.0, 32.0);
pub const OPTIMAL_TEMPERATURE_C: (f64, f64) = (28.0, 30.0);
const TEMPERATURE_PENALTY: f64 = 0.8;
const TEMPERATURE_BONUS: f64 = 1.1;
const PREMIUM_FEED_BONUS: f64 = 1.15;
pub const DEFAULT_HARVEST_FLEX_DAYS: u32 = 7;

/// Weekly growth after temperature and feed adjustments.
pub fn adjusted_weekly_growth(
    base_rate: f64,
    water_temperature: Option<f64>,
    feed_quality: Option<FeedQuality>,
) -> f64 {
    let mut rate = base_rate;
    if let Some(t) = water_temperature {
        if t < TOLERATED_TEMPERATURE_C.0 || t > TOLERATED_TEMPERATURE_C.1 {
            rate *= TEMPERATURE_PENALTY;
        } else if (OPTIMAL_TEMPERATURE_C.0..=OPTIMAL_TEMPERATURE_C.1).contains(&t) {
            rate *= TEMPERATURE_BONUS;
        }
    }
    if feed_quality == Some(FeedQuality::Premium) {
        rate *= PREMIUM_FEED_BONUS;
    }
    rate
}

/// Whole weeks needed to add `weight_gain` grams at `weekly_rate` grams per week.
///
/// # Errors
///
/// Returns `InvalidInput` on `target_weight` when the week count does not fit
/// in a `u32`.
pub fn weeks_to_gain(weight_gain: f64, weekly_rate: f64) -> Result<u32, AquaforgeError> {
    if weight_gain <= 0.0 || weekly_rate <= 0.0 {
        return Ok(0);
    }
    let weeks = (weight_gain / weekly_rate).ceil();
    if !weeks.is_finite() || weeks > f64::from(u32::MAX) {
        return Err(AquaforgeError::invalid(
            "target_weight",
            "weight gain is too large to plan in weeks",
        ));
    }
    Ok(weeks as u32)
}

pub(crate) fn weeks_to_days(weeks: u32) -> Result<u32, AquaforgeError> {
    weeks
        .checked_mul(7)
        .ok_or_else(|| AquaforgeError::invalid("target_weight", "growth period is too long"))
}

pub(crate) fn add_days(start: NaiveDate, days: u32) -> Result<NaiveDate, AquaforgeError> {
    start
        .checked_add_days(Days::new(u64::from(days)))
        .ok_or_else(|| AquaforgeError::invalid("start_date", "harvest date is out of the calendar range"))
}

/// Estimates how long the stock needs to grow from `starting_weight` to `target_weight`.
///
/// # Errors
///
/// Returns `InvalidInput` when the target does not exceed the starting weight, a
/// weight is not positive, or the growth period falls outside the calendar.
pub fn estimate_time_to_harvest(
    input: &EtpInput,
    profile: &SpeciesProfile,
) -> Result<EtpResult, AquaforgeError> {
    validate_etp_input(input)?;

    let base_rate = profile.weekly_growth_grams;
    let rate = adjusted_weekly_growth(base_rate, input.water_temperature, input.feed_quality);
    let weight_gain = input.target_weight - input.starting_weight;
    let estimated_weeks = weeks_to_gain(weight_gain, rate)?;
    let estimated_days = weeks_to_days(estimated_weeks)?;
    let estimated_date = add_days(input.start_date, estimated_days)?;

    let confidence = match (input.water_temperature.is_some(), input.feed_quality.is_some()) {
        (true, true) => Confidence::High,
        (false, false) => Confidence::Low,
        _ => Confidence::Medium,
    };

    let mut notes = vec![format!(
        "Base growth rate for {}: {} g/week",
        profile.display_name, base_rate
    )];
    if let Some(t) = input.water_temperature {
        if t < TOLERATED_TEMPERATURE_C.0 || t > TOLERATED_TEMPERATURE_C.1 {
            notes.push(format!(
                "Water temperature {}°C is outside {}-{}°C; growth slowed by 20%",
                t, TOLERATED_TEMPERATURE_C.0, TOLERATED_TEMPERATURE_C.1
            ));
        }
    }
    if input.feed_quality == Some(FeedQuality::Premium) {
        notes.push("Premium feed speeds growth by 15%".to_string());
    }

    Ok(EtpResult {
        estimated_days,
        estimated_weeks,
        estimated_date,
        confidence,
        adjusted_weekly_growth: rate,
        notes,
    })
}

/// Harvest window of `flex_days` either side of the estimate.
pub fn harvest_window(result: &EtpResult, flex_days: u32) -> HarvestWindow {
    let flex = Days::new(u64::from(flex_days));
    let optimal = result.estimated_date;
    HarvestWindow {
        earliest: optimal.checked_sub_days(flex).unwrap_or(NaiveDate::MIN),
        optimal,
        latest: optimal.checked_add_days(flex).unwrap_or(NaiveDate::MAX),
    }
}
