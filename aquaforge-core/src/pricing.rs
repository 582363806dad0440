//! Validity and effective price of buyer price agreements. Validity is always
//! computed against the instant passed in (or the current clock); nothing is cached.

use crate::error::AquaforgeError;
use aquaforge_schemas::pricing::PriceModel;
use chrono::{DateTime, Duration, Utc};

pub fn validate_price_model(model: &PriceModel) -> Result<(), AquaforgeError> {
    if model.valid_to() <= model.valid_from() {
        return Err(AquaforgeError::InvalidPriceModel(format!(
            "{} price valid_to ({}) must be after valid_from ({})",
            model.kind_name(),
            model.valid_to(),
            model.valid_from()
        )));
    }
    match model {
        PriceModel::Spot { price_per_kg, .. } | PriceModel::Fixed { price_per_kg, .. } => {
            if *price_per_kg < 0.0 {
                return Err(AquaforgeError::InvalidPriceModel(format!(
                    "price_per_kg must not be negative, got {}",
                    price_per_kg
                )));
            }
        }
        PriceModel::Indexed {
            floor,
            ceiling,
            repricing_window_days,
            ..
        } => {
            if floor > ceiling {
                return Err(AquaforgeError::InvalidPriceModel(format!(
                    "floor {} is above ceiling {}",
                    floor, ceiling
                )));
            }
            if *repricing_window_days == 0 {
                return Err(AquaforgeError::InvalidPriceModel(
                    "repricing_window_days must be at least 1".to_string(),
                ));
            }
        }
    }
    Ok(())
}

/// True when `at` falls inside the model's window, both ends inclusive.
pub fn is_valid_at(model: &PriceModel, at: DateTime<Utc>) -> bool {
    model.valid_from() <= at && at <= model.valid_to()
}

pub fn is_currently_valid(model: &PriceModel) -> bool {
    is_valid_at(model, Utc::now())
}

/// Price per kg the buyer pays. Indexed agreements follow `index_price` when
/// given (base price otherwise), clamped into `[floor, ceiling]`.
pub fn effective_price(model: &PriceModel, index_price: Option<f64>) -> f64 {
    match model {
        PriceModel::Spot { price_per_kg, .. } | PriceModel::Fixed { price_per_kg, .. } => {
            *price_per_kg
        }
        PriceModel::Indexed {
            base_price_per_kg,
            floor,
            ceiling,
            ..
        } => index_price
            .unwrap_or(*base_price_per_kg)
            .max(*floor)
            .min(*ceiling),
    }
}

/// Next repricing instant strictly after `at` for indexed agreements, if it
/// still falls inside the validity window.
pub fn next_repricing(model: &PriceModel, at: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let PriceModel::Indexed {
        repricing_window_days,
        valid_from,
        valid_to,
        ..
    } = model
    else {
        return None;
    };
    if *repricing_window_days == 0 {
        return None;
    }
    let window = Duration::days(i64::from(*repricing_window_days));
    let next = if at < *valid_from {
        *valid_from + window
    } else {
        let elapsed_windows = (at - *valid_from).num_seconds() / window.num_seconds();
        *valid_from + window * (elapsed_windows as i32 + 1)
    };
    (next <= *valid_to).then_some(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    fn indexed() -> PriceModel {
        PriceModel::Indexed {
            base_price_per_kg: 27_000.0,
            floor: 25_000.0,
            ceiling: 30_000.0,
            repricing_window_days: 14,
            valid_from: ts(2026, 1, 1),
            valid_to: ts(2026, 3, 1),
        }
    }

    #[test]
    fn window_is_inclusive() {
        let model = PriceModel::Spot {
            price_per_kg: 28_000.0,
            valid_from: ts(2026, 1, 1),
            valid_to: ts(2026, 1, 31),
        };
        assert!(is_valid_at(&model, ts(2026, 1, 1)));
        assert!(is_valid_at(&model, ts(2026, 1, 31)));
        assert!(!is_valid_at(&model, ts(2026, 2, 1)));
        assert!(!is_valid_at(&model, ts(2025, 12, 31)));
    }

    #[test]
    fn expired_contract_is_not_currently_valid() {
        let model = PriceModel::Fixed {
            price_per_kg: 26_500.0,
            valid_from: ts(2000, 1, 1),
            valid_to: ts(2000, 6, 1),
        };
        assert!(!is_currently_valid(&model));
        assert_eq!(effective_price(&model, Some(99.0)), 26_500.0);
    }

    #[test]
    fn inverted_window_is_rejected() {
        let model = PriceModel::Spot {
            price_per_kg: 28_000.0,
            valid_from: ts(2026, 2, 1),
            valid_to: ts(2026, 1, 1),
        };
        assert!(matches!(
            validate_price_model(&model),
            Err(AquaforgeError::InvalidPriceModel(_))
        ));
        assert!(validate_price_model(&indexed()).is_ok());
    }

    #[test]
    fn indexed_price_is_clamped() {
        let model = indexed();
        assert_eq!(effective_price(&model, None), 27_000.0);
        assert_eq!(effective_price(&model, Some(31_500.0)), 30_000.0);
        assert_eq!(effective_price(&model, Some(20_000.0)), 25_000.0);
    }

    #[test]
    fn repricing_follows_the_window() {
        let model = indexed();
        assert_eq!(next_repricing(&model, ts(2026, 1, 3)), Some(ts(2026, 1, 15)));
        assert_eq!(next_repricing(&model, ts(2026, 1, 15)), Some(ts(2026, 1, 29)));
        assert_eq!(next_repricing(&model, ts(2026, 2, 27)), None);
        assert_eq!(next_repricing(&model, ts(2025, 12, 1)), Some(ts(2026, 1, 15)));
    }
}
