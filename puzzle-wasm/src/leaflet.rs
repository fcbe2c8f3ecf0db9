//! Bindings for the Leaflet and `leaflet-image` globals loaded by the host page.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use puzzle_core::PuzzleConfig;
use puzzle_core::markers::FeatureCollection;

#[wasm_bindgen]
extern "C" {
    #[derive(Clone, Debug)]
    pub type LeafletMap;

    #[wasm_bindgen(js_namespace = L, js_name = map)]
    fn create_map(id: &str, options: &JsValue) -> LeafletMap;

    #[wasm_bindgen(method, js_name = getSize)]
    pub fn get_size(this: &LeafletMap) -> LeafletPoint;

    #[wasm_bindgen(method, js_name = setView)]
    fn set_view_raw(this: &LeafletMap, center: &JsValue, zoom: u32);

    pub type LeafletPoint;

    #[wasm_bindgen(method, getter)]
    pub fn x(this: &LeafletPoint) -> f64;

    #[wasm_bindgen(method, getter)]
    pub fn y(this: &LeafletPoint) -> f64;

    type TileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    fn tile_layer(url: &str, options: &JsValue) -> TileLayer;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &TileLayer, map: &LeafletMap);

    #[derive(Clone, Debug)]
    pub type GeoJsonLayer;

    #[wasm_bindgen(js_namespace = L, js_name = geoJson)]
    fn geo_json() -> GeoJsonLayer;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_layer_to(this: &GeoJsonLayer, map: &LeafletMap);

    #[wasm_bindgen(method, js_name = clearLayers)]
    fn clear_layers(this: &GeoJsonLayer);

    #[wasm_bindgen(method, js_name = addData)]
    fn add_data(this: &GeoJsonLayer, data: &JsValue);

    /// `leafletImage(map, function (err, canvas) { ... })`
    #[wasm_bindgen(js_name = leafletImage)]
    pub fn leaflet_image(map: &LeafletMap, callback: &JsValue);
}

#[derive(Serialize)]
struct MapOptions {
    center: [f64; 2],
    zoom: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TileOptions<'a> {
    max_zoom: u32,
    attribution: &'a str,
}

/// Serialize a Rust value into a plain JS object.
pub fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    let text = serde_json::to_string(value).map_err(|e| JsValue::from_str(&e.to_string()))?;
    js_sys::JSON::parse(&text)
}

/// Create the map in `#id` with the configured tile layer and an empty
/// GeoJSON overlay for the markers.
pub fn init_map(id: &str, config: &PuzzleConfig) -> Result<(LeafletMap, GeoJsonLayer), JsValue> {
    let options = to_js(&MapOptions {
        center: config.center,
        zoom: config.zoom,
    })?;
    let map = create_map(id, &options);
    let tile_options = to_js(&TileOptions {
        max_zoom: config.max_zoom,
        attribution: &config.attribution,
    })?;
    tile_layer(&config.tile_url, &tile_options).add_to(&map);
    let markers = geo_json();
    markers.add_layer_to(&map);
    Ok((map, markers))
}

impl LeafletMap {
    pub fn set_view(&self, lat: f64, lng: f64, zoom: u32) -> Result<(), JsValue> {
        self.set_view_raw(&to_js(&[lat, lng])?, zoom);
        Ok(())
    }
}

impl GeoJsonLayer {
    /// Replace every feature on the layer.
    pub fn replace_data(&self, data: &FeatureCollection) -> Result<(), JsValue> {
        let json = data.to_json().map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.clear_layers();
        self.add_data(&js_sys::JSON::parse(&json)?);
        Ok(())
    }
}
