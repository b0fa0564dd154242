use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use crate::maps::MapError;

/// `document.documentElement.clientHeight`
pub fn document_client_height() -> Option<i32> {
    web_sys::window()?
        .document()?
        .document_element()
        .map(|el| el.client_height())
}

/// Ejecutar `callback` un tick después del evento `load`
///
/// Si la página ya terminó de cargar (el módulo wasm arranca tarde), se
/// programa directamente.
pub fn after_page_load<F>(callback: F) -> Result<(), MapError>
where
    F: FnOnce() + 'static,
{
    let window = web_sys::window().ok_or(MapError::NoWindow)?;
    let document = window.document().ok_or(MapError::NoDocument)?;

    if document.ready_state() == "complete" {
        log::debug!("⏱️ [FRAME] Página ya cargada, difiriendo un tick");
        Timeout::new(0, callback).forget();
        return Ok(());
    }

    let on_load = Closure::once_into_js(move |_event: web_sys::Event| {
        Timeout::new(0, callback).forget();
    });
    window
        .add_event_listener_with_callback("load", on_load.unchecked_ref())
        .map_err(|e| MapError::Js(format!("{:?}", e)))
}
