// ============================================================================
// CONSTANTES - Protocolo del host y configuración del mapa
// ============================================================================
// Los tags `type` de los mensajes viven en models/message.rs (serde rename).
// Los valores configurables se fijan en tiempo de compilación (ver build.rs)
// ============================================================================

/// Versión de la API anunciada en `componentReady`
pub const API_VERSION: u32 = 1;

/// Etiqueta de tipo de dato para `setComponentValue`
pub const DATA_TYPE_JSON: &str = "json";

/// Origen destino de postMessage (sin restricción)
pub const TARGET_ORIGIN: &str = "*";

/// Id del contenedor del mapa en la página
pub const MAP_CONTAINER_ID: &str = "map";

/// Vista inicial: [lat, lon] + zoom
pub const INITIAL_CENTER: (f64, f64) = (51.004, 37.111);
pub const INITIAL_ZOOM: f64 = 5.0;

/// Círculo alrededor del punto seleccionado (radio en metros)
pub const PICK_RADIUS_METERS: f64 = 4000.0;
pub const PICK_CIRCLE_COLOR: &str = "#ff0000";
pub const PICK_CIRCLE_WEIGHT: f64 = 1.0;
pub const PICK_CIRCLE_FILL_OPACITY: f64 = 0.1;

/// Capa base topográfica (OpenStreetMap)
pub const OSM_LAYER_NAME: &str = "OpenStreetMap";
pub const OSM_TILE_URL: &str = match option_env!("OSM_TILE_URL") {
    Some(url) => url,
    None => "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png",
};
pub const OSM_MAX_ZOOM: u8 = 19;
pub const OSM_ATTRIBUTION: &str =
    "&copy; <a href=\"https://openstreetmap.org/copyright\">OpenStreetMap contributors</a>";

/// Capa base satelital (Esri World Imagery)
pub const ESRI_LAYER_NAME: &str = "EsriWorldImagery";
pub const ESRI_TILE_URL: &str = match option_env!("ESRI_TILE_URL") {
    Some(url) => url,
    None => "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/{z}/{y}/{x}",
};
pub const ESRI_ATTRIBUTION: &str = "Powered by <a href=\"https://www.esri.com/\">Esri</a>";

/// Nivel de log por defecto: error | warn | info | debug | trace
pub const LOG_LEVEL: &str = match option_env!("MAP_WIDGET_LOG_LEVEL") {
    Some(level) => level,
    None => "info",
};

/// Convierte `LOG_LEVEL` a `log::Level` (valor desconocido → Info)
pub fn log_level() -> log::Level {
    match LOG_LEVEL.to_ascii_lowercase().as_str() {
        "error" => log::Level::Error,
        "warn" | "warning" => log::Level::Warn,
        "debug" => log::Level::Debug,
        "trace" => log::Level::Trace,
        _ => log::Level::Info,
    }
}
