use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A selling-price agreement with a buyer. Each variant is only binding inside
/// its `[valid_from, valid_to]` window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PriceModel {
    Spot {
        price_per_kg: f64,
        valid_from: DateTime<Utc>,
        valid_to: DateTime<Utc>,
    },
    Fixed {
        price_per_kg: f64,
        valid_from: DateTime<Utc>,
        valid_to: DateTime<Utc>,
    },
    Indexed {
        base_price_per_kg: f64,
        floor: f64,
        ceiling: f64,
        repricing_window_days: u32,
        valid_from: DateTime<Utc>,
        valid_to: DateTime<Utc>,
    },
}

impl PriceModel {
    pub fn valid_from(&self) -> DateTime<Utc> {
        match self {
            PriceModel::Spot { valid_from, .. }
            | PriceModel::Fixed { valid_from, .. }
            | PriceModel::Indexed { valid_from, .. } => *valid_from,
        }
    }

    pub fn valid_to(&self) -> DateTime<Utc> {
        match self {
            PriceModel::Spot { valid_to, .. }
            | PriceModel::Fixed { valid_to, .. }
            | PriceModel::Indexed { valid_to, .. } => *valid_to,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            PriceModel::Spot { .. } => "spot",
            PriceModel::Fixed { .. } => "fixed",
            PriceModel::Indexed { .. } => "indexed",
        }
    }
}
