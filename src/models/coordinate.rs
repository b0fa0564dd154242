use serde::{Deserialize, Serialize};

/// Coordenada geográfica en grados
/// En el protocolo viaja como `[lat, lon]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from([latitude, longitude]: [f64; 2]) -> Self {
        Self { latitude, longitude }
    }
}

impl From<Coordinate> for [f64; 2] {
    fn from(coord: Coordinate) -> Self {
        [coord.latitude, coord.longitude]
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_lat_lon_pair() {
        let json = serde_json::to_value(Coordinate::new(40.0, -74.0)).unwrap();
        assert_eq!(json, serde_json::json!([40.0, -74.0]));
    }

    #[test]
    fn test_display() {
        assert_eq!(Coordinate::new(51.5, -0.1).to_string(), "(51.5, -0.1)");
    }
}
