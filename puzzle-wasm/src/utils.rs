use puzzle_core::PuzzleConfig;
use wasm_bindgen::JsValue;
use web_sys::Window;

use crate::constants::CONFIG_GLOBAL;

/// Fresh shuffle seed from `Math.random()`.
pub fn random_seed() -> u64 {
    (js_sys::Math::random() * (1u64 << 53) as f64) as u64
}

/// Page configuration: defaults, then `window.__PUZZLE_CONFIG`, then the
/// query string. Invalid overrides are logged and skipped.
pub fn load_config(window: &Window) -> PuzzleConfig {
    let mut config = PuzzleConfig::default();
    if let Some(text) = config_global(window) {
        match PuzzleConfig::from_json(&text) {
            Ok(c) => config = c,
            Err(e) => log::warn!("ignoring {CONFIG_GLOBAL}: {e}"),
        }
    }
    if let Ok(search) = window.location().search() {
        let mut with_query = config.clone();
        match with_query.apply_query(&search) {
            Ok(()) => config = with_query,
            Err(e) => log::warn!("ignoring query overrides: {e}"),
        }
    }
    config
}

fn config_global(window: &Window) -> Option<String> {
    let v = js_sys::Reflect::get(window, &JsValue::from_str(CONFIG_GLOBAL)).ok()?;
    if v.is_undefined() || v.is_null() {
        return None;
    }
    if let Some(s) = v.as_string() {
        return Some(s);
    }
    js_sys::JSON::stringify(&v).ok()?.as_string()
}
