// ============================================================================
// RENDER PAYLOAD - Instrucción de render enviada por el host
// ============================================================================
// El host manda lat/lon como números o como texto (inputs de texto).
// La cadena vacía significa "sin coordenada": no se mueve el mapa.
// ============================================================================

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};
use super::Coordinate;

/// Forma cruda de lat/lon; cualquier otro tipo JSON cae en `Other`
#[derive(Deserialize)]
#[serde(untagged)]
enum RawCoord {
    Number(f64),
    Text(String),
    Other(IgnoredAny),
}

/// Valor de lat/lon tal como llega del host
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawCoord")]
pub enum CoordField {
    Number(f64),
    Text(String),
    /// Bool, array u objeto: cuenta como ausente
    Invalid,
}

impl From<RawCoord> for CoordField {
    fn from(raw: RawCoord) -> Self {
        match raw {
            RawCoord::Number(n) => CoordField::Number(n),
            RawCoord::Text(s) => CoordField::Text(s),
            RawCoord::Other(_) => CoordField::Invalid,
        }
    }
}

impl CoordField {
    /// Grados si el campo tiene un valor numérico finito
    pub fn degrees(&self) -> Option<f64> {
        let value = match self {
            CoordField::Number(n) => *n,
            CoordField::Text(s) => {
                let s = s.trim();
                if s.is_empty() {
                    return None;
                }
                match s.parse::<f64>() {
                    Ok(n) => n,
                    Err(_) => {
                        log::warn!("⚠️ [RENDER] Coordenada no numérica ignorada: {:?}", s);
                        return None;
                    }
                }
            }
            CoordField::Invalid => {
                log::warn!("⚠️ [RENDER] Coordenada con tipo inválido ignorada");
                return None;
            }
        };
        value.is_finite().then_some(value)
    }
}

/// `is_custom` solo es `true` con un booleano `true`; null u otro tipo → `false`
fn lenient_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawFlag {
        Bool(bool),
        Other(IgnoredAny),
    }

    Ok(matches!(RawFlag::deserialize(deserializer)?, RawFlag::Bool(true)))
}

/// Payload de `streamlit:render` → `args.payload`
///
/// Cada campo se decodifica por separado: un campo roto nunca descarta
/// el resto del render.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RenderPayload {
    #[serde(default)]
    pub lat: Option<CoordField>,
    #[serde(default)]
    pub lon: Option<CoordField>,
    #[serde(default, deserialize_with = "lenient_flag")]
    pub is_custom: bool,
}

impl RenderPayload {
    /// Coordenada solo si lat y lon están presentes
    pub fn coordinate(&self) -> Option<Coordinate> {
        let lat = self.lat.as_ref()?.degrees()?;
        let lon = self.lon.as_ref()?.degrees()?;
        Some(Coordinate::new(lat, lon))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: serde_json::Value) -> RenderPayload {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_numeric_coordinates() {
        let p = payload(json!({"lat": 51.5, "lon": -0.1, "is_custom": true}));
        assert_eq!(p.coordinate(), Some(Coordinate::new(51.5, -0.1)));
        assert!(p.is_custom);
    }

    #[test]
    fn test_text_coordinates_from_inputs() {
        let p = payload(json!({"lat": "48.85", "lon": " 2.35 ", "is_custom": false}));
        assert_eq!(p.coordinate(), Some(Coordinate::new(48.85, 2.35)));
    }

    #[test]
    fn test_empty_string_means_absent() {
        assert_eq!(payload(json!({"lat": "", "lon": 2.0, "is_custom": true})).coordinate(), None);
        assert_eq!(payload(json!({"lat": 1.0, "lon": "", "is_custom": true})).coordinate(), None);
    }

    #[test]
    fn test_missing_or_null_fields() {
        let p = payload(json!({"lat": null}));
        assert_eq!(p.coordinate(), None);
        assert!(!p.is_custom);
    }

    #[test]
    fn test_garbage_text_is_absent() {
        let p = payload(json!({"lat": "north", "lon": "12", "is_custom": true}));
        assert_eq!(p.coordinate(), None);
    }

    #[test]
    fn test_wrong_coordinate_types_are_absent() {
        for bad in [json!(true), json!([1.0, 2.0]), json!({"deg": 1.0})] {
            let p = payload(json!({"lat": bad, "lon": 3.0, "is_custom": true}));
            assert_eq!(p.lat, Some(CoordField::Invalid));
            assert_eq!(p.coordinate(), None);
            assert!(p.is_custom);
        }
    }

    #[test]
    fn test_non_bool_is_custom_is_false() {
        for flag in [json!(null), json!(1), json!("true"), json!({})] {
            let p = payload(json!({"lat": 1.0, "lon": 2.0, "is_custom": flag}));
            assert!(!p.is_custom);
            assert_eq!(p.coordinate(), Some(Coordinate::new(1.0, 2.0)));
        }
    }
}
