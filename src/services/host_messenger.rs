// ============================================================================
// HOST MESSENGER - Único canal de salida hacia el host
// ============================================================================
// Fire-and-forget: no hay ack ni reintentos. Un fallo de envío se registra
// en el log y se descarta.
// ============================================================================

use crate::models::{Coordinate, Envelope, OutboundMessage};

/// Transporte hacia el frame padre (postMessage en web, fakes en tests)
pub trait HostChannel {
    fn post(&self, envelope: &Envelope<'_>) -> Result<(), String>;
}

pub struct HostMessenger<C: HostChannel> {
    channel: C,
}

impl<C: HostChannel> HostMessenger<C> {
    pub fn new(channel: C) -> Self {
        Self { channel }
    }

    /// Enviar un mensaje al host sin esperar respuesta
    pub fn send(&self, message: OutboundMessage) {
        log::debug!("📤 [HOST] {:?}", message);
        if let Err(e) = self.channel.post(&message.envelope()) {
            log::warn!("⚠️ [HOST] No se pudo enviar {:?}: {}", message, e);
        }
    }

    /// `componentReady` con la versión de API
    pub fn announce_ready(&self) {
        log::info!("🤝 [HOST] Componente listo");
        self.send(OutboundMessage::component_ready());
    }

    pub fn report_frame_height(&self, height: i32) {
        log::info!("📐 [HOST] Altura del frame: {}px", height);
        self.send(OutboundMessage::frame_height(height));
    }

    /// Punto elegido por el usuario → `setComponentValue`
    pub fn notify_host(&self, value: Coordinate) {
        log::info!("📍 [HOST] Coordenada elegida: {}", value);
        self.send(OutboundMessage::component_value(value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingChannel;
    use serde_json::json;

    #[test]
    fn test_notify_host_posts_value_envelope() {
        let channel = RecordingChannel::new();
        let messenger = HostMessenger::new(channel.clone());

        messenger.notify_host(Coordinate::new(12.5, 7.25));

        assert_eq!(
            channel.sent(),
            vec![json!({
                "isStreamlitMessage": true,
                "type": "streamlit:setComponentValue",
                "value": [12.5, 7.25],
                "dataType": "json"
            })]
        );
    }

    #[test]
    fn test_failed_post_is_swallowed() {
        let channel = RecordingChannel::failing();
        let messenger = HostMessenger::new(channel.clone());

        messenger.announce_ready();
        messenger.report_frame_height(300);

        assert!(channel.sent().is_empty());
        assert_eq!(channel.attempts(), 2);
    }
}
