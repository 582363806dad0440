/// Rounds to `decimals` places, half away from zero.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Kilograms of biomass or feed.
pub fn kg(value: f64) -> f64 {
    round_to(value, 2)
}

/// Whole currency units.
pub fn money(value: f64) -> f64 {
    value.round()
}

pub fn percent(value: f64) -> f64 {
    round_to(value, 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(round_to(2.345, 1), 2.3);
        assert_eq!(money(-1090400.4), -1090400.0);
        assert_eq!(percent(-27.6303), -27.63);
        assert_eq!(kg(122.4), 122.4);
    }
}
