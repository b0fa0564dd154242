// ============================================================================
// MAP WIDGET - Selector de coordenadas sobre Leaflet (RUST + WASM)
// ============================================================================
// Componente para un iframe de Streamlit:
// - Models: mensajes del protocolo y payload de render
// - Maps: trait del mapa + implementación Leaflet
// - Services: canal hacia/desde el host
// - State: modo de interacción (bloqueado / elegir punto)
// - ViewModels: lógica del widget, sin dependencias de plataforma
// ============================================================================

pub mod models;
pub mod maps;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;

#[cfg(target_arch = "wasm32")]
mod app;

#[cfg(test)]
mod testing;

pub use maps::{MapConfig, MapError, MapSurface, ScreenPoint};
pub use models::{Coordinate, InboundMessage, OutboundMessage, RenderPayload};
pub use services::{HostChannel, HostMessenger};
pub use state::PickMode;
pub use viewmodels::MapWidget;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
thread_local! {
    static APP: std::cell::RefCell<Option<app::App>> = std::cell::RefCell::new(None);
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::new(utils::constants::log_level()));
    log::info!("🚀 Map widget - Rust + WASM");

    let app = app::App::new(MapConfig::default()).map_err(to_js_error)?;
    app.mount().map_err(to_js_error)?;

    APP.with(|cell| {
        *cell.borrow_mut() = Some(app);
    });

    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn to_js_error(e: MapError) -> JsValue {
    log::error!("❌ [APP] {}", e);
    JsValue::from_str(&e.to_string())
}
