// Capacidad de mapa: trait común + implementación Leaflet (solo web)

pub mod traits;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use traits::{BaseLayer, CircleStyle, MapConfig, MapError, MapSurface, ScaleBar, ScreenPoint};
