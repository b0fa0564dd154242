// ============================================================================
// MAP WIDGET - Render del host + click para elegir coordenada
// ============================================================================
// Sin dependencias de plataforma: el mapa y el canal al host se inyectan,
// así los tests usan fakes.
// ============================================================================

use crate::maps::{CircleStyle, MapSurface, ScreenPoint};
use crate::models::{Coordinate, InboundMessage, RenderPayload};
use crate::services::{HostChannel, HostMessenger};
use crate::state::PickMode;

pub struct MapWidget<S: MapSurface, C: HostChannel> {
    surface: S,
    messenger: HostMessenger<C>,
    pick_circle: CircleStyle,
    mode: PickMode,
    announced: bool,
}

impl<S: MapSurface, C: HostChannel> MapWidget<S, C> {
    pub fn new(surface: S, messenger: HostMessenger<C>, pick_circle: CircleStyle) -> Self {
        Self {
            surface,
            messenger,
            pick_circle,
            mode: PickMode::Locked,
            announced: false,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn mode(&self) -> PickMode {
        self.mode
    }

    /// Anunciar al host que el componente está listo (solo la primera vez)
    pub fn start(&mut self) {
        if self.announced {
            log::warn!("⚠️ [WIDGET] start ya fue llamado, ignorando llamada duplicada");
            return;
        }
        self.announced = true;
        self.messenger.announce_ready();
    }

    /// Despachar un mensaje del host
    pub fn handle_message(&mut self, message: InboundMessage) {
        match message {
            InboundMessage::Render { args } => match args.payload {
                Some(payload) => self.apply_render(&payload),
                None => log::debug!("📭 [WIDGET] Render sin payload, ignorado"),
            },
            InboundMessage::Unknown => {}
        }
    }

    /// Aplicar un render: el modo siempre, el punto solo si lat y lon vienen
    pub fn apply_render(&mut self, payload: &RenderPayload) {
        self.mode = PickMode::from_is_custom(payload.is_custom);
        log::debug!("🔄 [WIDGET] Render recibido, modo {:?}", self.mode);

        if let Some(at) = payload.coordinate() {
            log::info!("🎯 [WIDGET] Centrando en {}", at);
            self.place_pin(at);
        }
    }

    /// Click en el mapa; devuelve la coordenada enviada al host
    pub fn handle_click(&mut self, point: ScreenPoint) -> Option<Coordinate> {
        if !self.mode.is_pickable() {
            return None;
        }

        self.surface.clear_overlays();
        let at = self.surface.project(point);
        self.draw_pin(at);
        self.surface.set_view(at);
        self.messenger.notify_host(at);
        Some(at)
    }

    pub fn report_frame_height(&self, height: i32) {
        self.messenger.report_frame_height(height);
    }

    fn place_pin(&mut self, at: Coordinate) {
        self.surface.clear_overlays();
        self.draw_pin(at);
        self.surface.set_view(at);
    }

    fn draw_pin(&mut self, at: Coordinate) {
        self.surface.add_marker(at);
        self.surface.add_circle(at, &self.pick_circle);
    }
}
