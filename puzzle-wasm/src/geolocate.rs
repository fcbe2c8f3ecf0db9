use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Window;

use crate::capture::js_message;

fn coord(position: &JsValue, key: &str) -> Option<f64> {
    let coords = js_sys::Reflect::get(position, &JsValue::from_str("coords")).ok()?;
    js_sys::Reflect::get(&coords, &JsValue::from_str(key))
        .ok()?
        .as_f64()
}

/// Ask the browser for the current position once.
///
/// `on_found` receives `(lat, lng)`. Denial, timeouts and missing support are
/// logged; nothing else happens in that case.
pub fn locate<F>(window: &Window, on_found: F) -> Result<(), JsValue>
where
    F: FnOnce(f64, f64) + 'static,
{
    let geolocation = match window.navigator().geolocation() {
        Ok(g) => g,
        Err(err) => {
            log::warn!("geolocation unavailable: {}", js_message(&err));
            return Err(JsValue::from_str(crate::constants::NO_GEOLOCATION_MESSAGE));
        }
    };
    let success = Closure::once_into_js(move |position: JsValue| {
        match (coord(&position, "latitude"), coord(&position, "longitude")) {
            (Some(lat), Some(lng)) => on_found(lat, lng),
            _ => log::error!("position callback without coordinates"),
        }
    });
    let failure = Closure::once_into_js(|err: JsValue| {
        log::error!("Error getting current location: {}", js_message(&err));
    });
    geolocation.get_current_position_with_error_callback(
        success.unchecked_ref(),
        Some(failure.unchecked_ref()),
    )?;
    Ok(())
}
