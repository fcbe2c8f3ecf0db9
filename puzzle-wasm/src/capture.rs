use puzzle_core::{CaptureCallback, CaptureError, Image, SurfaceCapture, Viewport};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use crate::leaflet::{LeafletMap, leaflet_image};

/// The Leaflet map seen through the engine's capture capabilities.
#[derive(Clone)]
pub struct LeafletSurface {
    map: LeafletMap,
}

impl LeafletSurface {
    pub fn new(map: LeafletMap) -> Self {
        Self { map }
    }
}

impl SurfaceCapture for LeafletSurface {
    fn render_surface_to_image(&self, done: CaptureCallback) {
        let callback = Closure::once_into_js(move |err: JsValue, canvas: JsValue| {
            done(image_from_callback(err, canvas));
        });
        leaflet_image(&self.map, &callback);
    }
}

impl Viewport for LeafletSurface {
    fn current_viewport_size(&self) -> (u32, u32) {
        let size = self.map.get_size();
        (size.x().max(0.0) as u32, size.y().max(0.0) as u32)
    }
}

fn image_from_callback(err: JsValue, canvas: JsValue) -> Result<Image, CaptureError> {
    if !err.is_null() && !err.is_undefined() {
        return Err(CaptureError::new(js_message(&err)));
    }
    let canvas: HtmlCanvasElement = canvas
        .dyn_into()
        .map_err(|_| CaptureError::new("leafletImage did not return a canvas"))?;
    let url = canvas
        .to_data_url()
        .map_err(|e| CaptureError::new(js_message(&e)))?;
    Image::new(url, canvas.width(), canvas.height()).map_err(|e| CaptureError::new(e.to_string()))
}

/// Best-effort text for a thrown JS value or error object.
pub fn js_message(value: &JsValue) -> String {
    if let Some(s) = value.as_string() {
        return s;
    }
    js_sys::Reflect::get(value, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| format!("{value:?}"))
}
