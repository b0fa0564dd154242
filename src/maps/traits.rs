use crate::models::Coordinate;
use crate::utils::constants::*;

/// Posición de un click relativa al contenedor del mapa (px)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Capacidad de mapa que necesita el widget
///
/// Una sola capa de overlays (marcador + círculo) que se vacía entera en
/// cada actualización. Los fallos de render los absorbe la librería.
pub trait MapSurface {
    /// Vaciar el grupo de overlays
    fn clear_overlays(&mut self);

    /// Agregar un marcador al grupo de overlays
    fn add_marker(&mut self, at: Coordinate);

    /// Agregar un círculo al grupo de overlays
    fn add_circle(&mut self, at: Coordinate, style: &CircleStyle);

    /// Centrar la vista sin cambiar el zoom
    fn set_view(&mut self, center: Coordinate);

    /// Convertir un punto de pantalla a coordenada geográfica
    fn project(&self, point: ScreenPoint) -> Coordinate;
}

/// Configuración del mapa
#[derive(Debug, Clone, PartialEq)]
pub struct MapConfig {
    pub container_id: String,
    pub center: Coordinate,
    pub zoom: f64,
    /// La primera capa es la activa al arrancar
    pub base_layers: Vec<BaseLayer>,
    pub scale_bar: ScaleBar,
    pub pick_circle: CircleStyle,
}

impl Default for MapConfig {
    fn default() -> Self {
        let (lat, lon) = INITIAL_CENTER;
        Self {
            container_id: MAP_CONTAINER_ID.to_string(),
            center: Coordinate::new(lat, lon),
            zoom: INITIAL_ZOOM,
            base_layers: vec![BaseLayer::streets(), BaseLayer::satellite()],
            scale_bar: ScaleBar::default(),
            pick_circle: CircleStyle::default(),
        }
    }
}

/// Capa base de tiles (mutuamente excluyentes en el selector)
#[derive(Debug, Clone, PartialEq)]
pub struct BaseLayer {
    pub name: String,
    pub url_template: String,
    pub attribution: String,
    pub max_zoom: Option<u8>,
}

impl BaseLayer {
    /// OpenStreetMap (topo)
    pub fn streets() -> Self {
        Self {
            name: OSM_LAYER_NAME.to_string(),
            url_template: OSM_TILE_URL.to_string(),
            attribution: OSM_ATTRIBUTION.to_string(),
            max_zoom: Some(OSM_MAX_ZOOM),
        }
    }

    /// Esri World Imagery (satélite)
    pub fn satellite() -> Self {
        Self {
            name: ESRI_LAYER_NAME.to_string(),
            url_template: ESRI_TILE_URL.to_string(),
            attribution: ESRI_ATTRIBUTION.to_string(),
            max_zoom: None,
        }
    }
}

/// Barra de escala
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleBar {
    pub imperial: bool,
    pub metric: bool,
    pub position: String,
}

impl Default for ScaleBar {
    fn default() -> Self {
        Self {
            imperial: true,
            metric: true,
            position: "bottomleft".to_string(),
        }
    }
}

/// Estilo del círculo alrededor del punto
#[derive(Debug, Clone, PartialEq)]
pub struct CircleStyle {
    pub radius: f64,
    pub color: String,
    pub weight: f64,
    pub fill_opacity: f64,
}

impl Default for CircleStyle {
    fn default() -> Self {
        Self {
            radius: PICK_RADIUS_METERS,
            color: PICK_CIRCLE_COLOR.to_string(),
            weight: PICK_CIRCLE_WEIGHT,
            fill_opacity: PICK_CIRCLE_FILL_OPACITY,
        }
    }
}

/// Error al montar el mapa
#[derive(Debug, Clone, PartialEq)]
pub enum MapError {
    NoWindow,
    NoDocument,
    ContainerNotFound(String),
    LeafletUnavailable,
    Js(String),
}

impl std::fmt::Display for MapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MapError::NoWindow => write!(f, "No window available"),
            MapError::NoDocument => write!(f, "No document available"),
            MapError::ContainerNotFound(id) => write!(f, "Map container #{} not found", id),
            MapError::LeafletUnavailable => write!(f, "Leaflet (global L) is not loaded"),
            MapError::Js(msg) => write!(f, "JavaScript error: {}", msg),
        }
    }
}

impl std::error::Error for MapError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MapConfig::default();
        assert_eq!(config.container_id, "map");
        assert_eq!(config.center, Coordinate::new(51.004, 37.111));
        assert_eq!(config.zoom, 5.0);
        let names: Vec<_> = config.base_layers.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, ["OpenStreetMap", "EsriWorldImagery"]);
        assert_eq!(config.base_layers[0].max_zoom, Some(19));
        assert_eq!(config.pick_circle.radius, 4000.0);
        assert_eq!(config.scale_bar.position, "bottomleft");
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            MapError::ContainerNotFound("map".into()).to_string(),
            "Map container #map not found"
        );
    }
}
