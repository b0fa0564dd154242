// ============================================================================
// APP - Montaje del widget en la página (solo wasm32)
// ============================================================================
// Compone el mapa Leaflet y el canal a `window.parent`, y registra los
// listeners globales UNA sola vez.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::maps::web::LeafletSurface;
use crate::maps::{MapConfig, MapError};
use crate::services::{frame_height, render_listener, HostMessenger, ParentWindowChannel};
use crate::viewmodels::MapWidget;

pub type WebMapWidget = MapWidget<LeafletSurface, ParentWindowChannel>;

/// Aplicación principal
pub struct App {
    widget: Rc<RefCell<WebMapWidget>>,
}

impl App {
    /// Crear el mapa y el widget
    pub fn new(config: MapConfig) -> Result<Self, MapError> {
        let surface = LeafletSurface::create(&config)?;
        let messenger = HostMessenger::new(ParentWindowChannel);
        let widget = MapWidget::new(surface, messenger, config.pick_circle);
        Ok(Self {
            widget: Rc::new(RefCell::new(widget)),
        })
    }

    /// Registrar listeners y anunciar `componentReady`
    pub fn mount(&self) -> Result<(), MapError> {
        let widget = self.widget.clone();
        self.widget.borrow().surface().on_click(move |point| {
            match widget.try_borrow_mut() {
                Ok(mut w) => {
                    w.handle_click(point);
                }
                Err(_) => log::warn!("⚠️ [APP] Click durante otra actualización, ignorado"),
            }
        });

        let widget = self.widget.clone();
        render_listener::subscribe(move |message| match widget.try_borrow_mut() {
            Ok(mut w) => w.handle_message(message),
            Err(_) => log::warn!("⚠️ [APP] Mensaje durante otra actualización, ignorado"),
        })?;

        self.widget.borrow_mut().start();

        let widget = self.widget.clone();
        frame_height::after_page_load(move || match frame_height::document_client_height() {
            Some(height) => widget.borrow().report_frame_height(height),
            None => log::warn!("⚠️ [APP] No se pudo medir documentElement.clientHeight"),
        })?;

        log::info!("✅ [APP] Widget montado");
        Ok(())
    }
}
