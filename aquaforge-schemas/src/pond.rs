use serde::{Deserialize, Serialize};

/// Construction type of the pond. Tarpaulin ponds carry a lower safe population.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PondType {
    Terpal,
    Beton,
}

/// Pond geometry and stocking plan as entered by the farmer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PondSpec {
    pub pond_type: PondType,
    /// Metres.
    pub length: f64,
    /// Metres.
    pub width: f64,
    /// Metres.
    pub depth: f64,
    /// Fish per square metre.
    pub stocking_density: f64,
    pub species: String,
}

impl PondSpec {
    pub fn surface_area(&self) -> f64 {
        self.length * self.width
    }

    pub fn volume(&self) -> f64 {
        self.length * self.width * self.depth
    }

    pub fn total_fish(&self) -> f64 {
        self.surface_area() * self.stocking_density
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_geometry() {
        let pond = PondSpec {
            pond_type: PondType::Beton,
            length: 4.0,
            width: 5.0,
            depth: 1.5,
            stocking_density: 50.0,
            species: "lele".to_string(),
        };
        assert_eq!(pond.surface_area(), 20.0);
        assert_eq!(pond.volume(), 30.0);
        assert_eq!(pond.total_fish(), 1000.0);
    }

    #[test]
    fn pond_type_uses_snake_case() {
        let json = serde_json::to_string(&PondType::Terpal).unwrap();
        assert_eq!(json, "\"terpal\"");
    }
}
