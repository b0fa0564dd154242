// ============================================================================
// RENDER LISTENER - Único canal de entrada desde el host
// ============================================================================
// Se registra UNA VEZ en `window` y no se desregistra nunca.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::MessageEvent;
use crate::maps::MapError;
use crate::models::InboundMessage;

/// Decodificar `event.data`; lo que no sea un mensaje del host es `None`
pub fn decode(data: JsValue) -> Option<InboundMessage> {
    match serde_wasm_bindgen::from_value::<InboundMessage>(data) {
        Ok(message) => Some(message),
        Err(e) => {
            log::debug!("📭 [RENDER] Mensaje no reconocido: {}", e);
            None
        }
    }
}

/// Suscribirse a los mensajes del host durante toda la vida de la página
pub fn subscribe<F>(mut handler: F) -> Result<(), MapError>
where
    F: FnMut(InboundMessage) + 'static,
{
    let window = web_sys::window().ok_or(MapError::NoWindow)?;

    let closure = Closure::wrap(Box::new(move |event: MessageEvent| {
        if let Some(message) = decode(event.data()) {
            handler(message);
        }
    }) as Box<dyn FnMut(MessageEvent)>);

    window
        .add_event_listener_with_callback("message", closure.as_ref().unchecked_ref())
        .map_err(|e| MapError::Js(format!("{:?}", e)))?;
    // Listener global, registrado una sola vez
    closure.forget();

    log::info!("👂 [RENDER] Escuchando mensajes del host");
    Ok(())
}
