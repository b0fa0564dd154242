use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use crate::models::Coordinate;
use crate::utils::leaflet_ffi::{self as leaflet, LayerGroup, LeafletMap};
use super::{MapConfig, MapError, MapSurface, ScreenPoint, CircleStyle};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TileOptions<'a> {
    attribution: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_zoom: Option<u8>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CircleOptions<'a> {
    radius: f64,
    color: &'a str,
    weight: f64,
    fill_opacity: f64,
}

#[derive(Serialize)]
struct ScaleOptions<'a> {
    imperial: bool,
    metric: bool,
    position: &'a str,
}

/// Objeto JS plano (los maps de serde pasan a objetos, no a `Map`)
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, MapError> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| MapError::Js(e.to_string()))
}

fn lat_lng(coord: Coordinate) -> JsValue {
    leaflet::lat_lng_array(coord.latitude, coord.longitude)
}

/// Mapa Leaflet montado en el contenedor de la página
pub struct LeafletSurface {
    map: LeafletMap,
    overlays: LayerGroup,
}

impl LeafletSurface {
    /// Crear el mapa: capas base, selector de capas, escala y grupo de overlays
    pub fn create(config: &MapConfig) -> Result<Self, MapError> {
        let window = web_sys::window().ok_or(MapError::NoWindow)?;
        let document = window.document().ok_or(MapError::NoDocument)?;
        if document.get_element_by_id(&config.container_id).is_none() {
            return Err(MapError::ContainerNotFound(config.container_id.clone()));
        }
        if !leaflet::leaflet_loaded() {
            return Err(MapError::LeafletUnavailable);
        }

        log::info!("🗺️ [MAP] Creando mapa en #{}", config.container_id);

        let map = leaflet::map(&config.container_id)
            .map_err(|e| MapError::Js(format!("{:?}", e)))?;
        map.set_view(&lat_lng(config.center), Some(config.zoom));

        // Capas base: la primera queda activa
        let base_layers = js_sys::Object::new();
        for (i, layer) in config.base_layers.iter().enumerate() {
            let options = to_js(&TileOptions {
                attribution: &layer.attribution,
                max_zoom: layer.max_zoom,
            })?;
            let tiles = leaflet::tile_layer(&layer.url_template, &options);
            if i == 0 {
                tiles.add_to(&map);
            }
            js_sys::Reflect::set(&base_layers, &JsValue::from_str(&layer.name), &tiles)
                .map_err(|e| MapError::Js(format!("{:?}", e)))?;
        }
        leaflet::control_layers(&base_layers).add_to(&map);

        let scale = to_js(&ScaleOptions {
            imperial: config.scale_bar.imperial,
            metric: config.scale_bar.metric,
            position: &config.scale_bar.position,
        })?;
        leaflet::control_scale(&scale).add_to(&map);

        let overlays = leaflet::layer_group();
        overlays.add_to(&map);

        log::info!("✅ [MAP] Mapa listo ({} capas base)", config.base_layers.len());
        Ok(Self { map, overlays })
    }

    /// Registrar el handler de click (una sola vez, vive toda la página)
    pub fn on_click<F>(&self, mut handler: F)
    where
        F: FnMut(ScreenPoint) + 'static,
    {
        let map = self.map.clone();
        let closure = Closure::wrap(Box::new(move |event: JsValue| {
            let original = js_sys::Reflect::get(&event, &JsValue::from_str("originalEvent"))
                .ok()
                .and_then(|e| e.dyn_into::<MouseEvent>().ok());
            match original {
                Some(mouse_event) => {
                    let point = map.mouse_event_to_container_point(&mouse_event);
                    handler(ScreenPoint::new(point.x(), point.y()));
                }
                None => log::debug!("🖱️ [MAP] Click sin originalEvent, ignorado"),
            }
        }) as Box<dyn FnMut(JsValue)>);

        self.map.on("click", closure.as_ref().unchecked_ref());
        // El mapa vive toda la página: el closure no se libera nunca
        closure.forget();
    }
}

impl MapSurface for LeafletSurface {
    fn clear_overlays(&mut self) {
        self.overlays.clear_layers();
    }

    fn add_marker(&mut self, at: Coordinate) {
        leaflet::marker(&lat_lng(at)).add_to(&self.overlays);
    }

    fn add_circle(&mut self, at: Coordinate, style: &CircleStyle) {
        let options = CircleOptions {
            radius: style.radius,
            color: &style.color,
            weight: style.weight,
            fill_opacity: style.fill_opacity,
        };
        match to_js(&options) {
            Ok(options) => leaflet::circle(&lat_lng(at), &options).add_to(&self.overlays),
            Err(e) => log::warn!("⚠️ [MAP] Opciones de círculo inválidas: {}", e),
        }
    }

    fn set_view(&mut self, center: Coordinate) {
        self.map.set_view(&lat_lng(center), None);
    }

    fn project(&self, point: ScreenPoint) -> Coordinate {
        let geo = self
            .map
            .container_point_to_lat_lng(&leaflet::point_array(point.x, point.y));
        Coordinate::new(geo.lat(), geo.lng())
    }
}
