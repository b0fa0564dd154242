// ============================================================================
// LEAFLET FFI - Bindings a la API global `L` de Leaflet 1.9
// ============================================================================
// Solo wrappers para funciones JS - Sin estado, sin lógica
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::MouseEvent;

#[wasm_bindgen]
extern "C" {
    /// Cualquier capa/control de Leaflet que se pueda añadir a un mapa
    pub type Layer;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &Layer, target: &JsValue);

    /// `L.LayerGroup`
    #[wasm_bindgen(extends = Layer)]
    pub type LayerGroup;

    #[wasm_bindgen(method, js_name = clearLayers)]
    pub fn clear_layers(this: &LayerGroup);

    /// `L.Map`
    #[derive(Clone)]
    pub type LeafletMap;

    #[wasm_bindgen(method, js_name = setView)]
    pub fn set_view(this: &LeafletMap, center: &JsValue, zoom: Option<f64>);

    #[wasm_bindgen(method)]
    pub fn on(this: &LeafletMap, event: &str, handler: &js_sys::Function);

    #[wasm_bindgen(method, js_name = mouseEventToContainerPoint)]
    pub fn mouse_event_to_container_point(this: &LeafletMap, event: &MouseEvent) -> Point;

    #[wasm_bindgen(method, js_name = containerPointToLatLng)]
    pub fn container_point_to_lat_lng(this: &LeafletMap, point: &JsValue) -> LatLng;

    /// `L.Point`
    pub type Point;

    #[wasm_bindgen(method, getter)]
    pub fn x(this: &Point) -> f64;

    #[wasm_bindgen(method, getter)]
    pub fn y(this: &Point) -> f64;

    /// `L.LatLng`
    pub type LatLng;

    #[wasm_bindgen(method, getter)]
    pub fn lat(this: &LatLng) -> f64;

    #[wasm_bindgen(method, getter)]
    pub fn lng(this: &LatLng) -> f64;

    // Fábricas de `L`

    #[wasm_bindgen(catch, js_namespace = L, js_name = map)]
    pub fn map(container_id: &str) -> Result<LeafletMap, JsValue>;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    pub fn tile_layer(url_template: &str, options: &JsValue) -> Layer;

    #[wasm_bindgen(js_namespace = L, js_name = layerGroup)]
    pub fn layer_group() -> LayerGroup;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    pub fn marker(lat_lng: &JsValue) -> Layer;

    #[wasm_bindgen(js_namespace = L, js_name = circle)]
    pub fn circle(lat_lng: &JsValue, options: &JsValue) -> Layer;

    #[wasm_bindgen(js_namespace = ["L", "control"], js_name = layers)]
    pub fn control_layers(base_layers: &JsValue) -> Control;

    #[wasm_bindgen(js_namespace = ["L", "control"], js_name = scale)]
    pub fn control_scale(options: &JsValue) -> Control;
}

#[wasm_bindgen]
extern "C" {
    /// `L.Control`
    pub type Control;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &Control, map: &LeafletMap);
}

/// Helper: `[lat, lng]` como array JS
pub fn lat_lng_array(lat: f64, lng: f64) -> JsValue {
    js_sys::Array::of2(&JsValue::from_f64(lat), &JsValue::from_f64(lng)).into()
}

/// Helper: `[x, y]` como array JS (Leaflet lo acepta como `L.Point`)
pub fn point_array(x: f64, y: f64) -> JsValue {
    js_sys::Array::of2(&JsValue::from_f64(x), &JsValue::from_f64(y)).into()
}

/// Helper: ¿está cargado `window.L`?
pub fn leaflet_loaded() -> bool {
    js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("L"))
        .map(|l| !l.is_undefined() && !l.is_null())
        .unwrap_or(false)
}
