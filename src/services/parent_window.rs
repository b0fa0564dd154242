use serde::Serialize;
use crate::models::Envelope;
use crate::utils::constants::TARGET_ORIGIN;
use super::HostChannel;

/// `window.parent.postMessage(envelope, "*")`
pub struct ParentWindowChannel;

impl HostChannel for ParentWindowChannel {
    fn post(&self, envelope: &Envelope<'_>) -> Result<(), String> {
        let window = web_sys::window().ok_or("No window")?;
        // En una página sin iframe, parent es la propia ventana
        let target = window
            .parent()
            .map_err(|e| format!("{:?}", e))?
            .unwrap_or(window);

        let data = envelope
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .map_err(|e| e.to_string())?;

        target
            .post_message(&data, TARGET_ORIGIN)
            .map_err(|e| format!("{:?}", e))
    }
}
