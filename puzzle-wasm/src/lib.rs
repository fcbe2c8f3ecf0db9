use std::cell::RefCell;
use std::rc::Rc;

use puzzle_core::{SplitMix64, SurfaceCapture, markers, request_puzzle};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

mod capture;
mod constants;
mod dnd;
mod geolocate;
mod leaflet;
mod logger;
mod render;
mod state;
mod utils;

use crate::capture::LeafletSurface;
use crate::constants::{
    CAPTURE_BUTTON_ID, LOCATE_BUTTON_ID, MAP_ID, PUZZLE_BUTTON_ID, RESHUFFLE_BUTTON_ID,
};
use crate::state::{STATE, State};

fn surface(state: &Rc<RefCell<State>>) -> LeafletSurface {
    LeafletSurface::new(state.borrow().map.clone())
}

fn seed_for(state: &Rc<RefCell<State>>) -> u64 {
    state.borrow().config.seed.unwrap_or_else(utils::random_seed)
}

/// Scatter random markers over the map, replacing the previous set.
fn generate_markers(state: &Rc<RefCell<State>>) -> Result<(), JsValue> {
    let s = state.borrow();
    let mut rng = SplitMix64::new(utils::random_seed());
    let data = markers::random_points(s.config.center, s.config.marker_count, &mut rng);
    s.markers.replace_data(&data)?;
    log::debug!("placed {} markers", data.features.len());
    Ok(())
}

/// Capture the map and append the picture to `#images`.
fn capture_image(state: Rc<RefCell<State>>) {
    let surface = surface(&state);
    surface.render_surface_to_image(Box::new(move |result| match result {
        Ok(image) => {
            if let Err(err) = render::append_capture(&state.borrow().document, &image) {
                log::error!("failed to show captured image: {err:?}");
            }
        }
        Err(err) => log::error!("Error capturing map image: {err}"),
    }));
}

/// Center the map on the user's position, then capture it.
fn locate_and_capture(state: Rc<RefCell<State>>) {
    let window = state.borrow().window.clone();
    let st = state.clone();
    let found = move |lat: f64, lng: f64| {
        let zoom = st.borrow().config.locate_zoom;
        if let Err(err) = st.borrow().map.set_view(lat, lng, zoom) {
            log::error!("failed to move map: {err:?}");
            return;
        }
        capture_image(st);
    };
    if let Err(msg) = geolocate::locate(&window, found)
        && let Some(msg) = msg.as_string()
        && let Err(err) = window.alert_with_message(&msg)
    {
        log::warn!("could not show geolocation alert: {err:?}");
    }
}

/// Capture, cut, shuffle and display a new puzzle, replacing any previous one.
fn generate_puzzle(state: Rc<RefCell<State>>) {
    let surface = surface(&state);
    let grid = state.borrow().config.grid();
    let seed = seed_for(&state);
    request_puzzle(&surface, &surface, grid, seed, move |result| {
        let Ok(session) = result else {
            return;
        };
        let mut s = state.borrow_mut();
        if let Err(err) = render::show_puzzle(&s.document, &session) {
            log::error!("failed to show puzzle: {err:?}");
        }
        s.session = Some(session);
    });
}

fn reshuffle(state: &Rc<RefCell<State>>) {
    let seed = utils::random_seed();
    let mut s = state.borrow_mut();
    let s = &mut *s;
    let Some(session) = s.session.as_mut() else {
        log::debug!("nothing to reshuffle");
        return;
    };
    session.reshuffle(seed);
    if let Err(err) = render::refresh_puzzle(&s.document, session) {
        log::error!("failed to redraw puzzle: {err:?}");
    }
}

/// Start a new round of the current puzzle with a random seed.
#[wasm_bindgen(js_name = reshufflePuzzle)]
pub fn reshuffle_puzzle() {
    STATE.with(|st| {
        if let Some(state) = st.borrow().as_ref() {
            reshuffle(state);
        }
    });
}

fn on_click<F>(state: &Rc<RefCell<State>>, id: &str, handler: F) -> Result<(), JsValue>
where
    F: Fn(Rc<RefCell<State>>) + 'static,
{
    let doc = state.borrow().document.clone();
    if let Some(btn) = doc.get_element_by_id(id) {
        let btn: HtmlElement = btn.dyn_into()?;
        let st = state.clone();
        let onclick = Closure::<dyn FnMut()>::wrap(Box::new(move || handler(st.clone())));
        btn.set_onclick(Some(onclick.as_ref().unchecked_ref()));
        onclick.forget();
    } else {
        log::debug!("no #{id} button on this page");
    }
    Ok(())
}

fn attach_ui(state: Rc<RefCell<State>>) -> Result<(), JsValue> {
    on_click(&state, CAPTURE_BUTTON_ID, capture_image)?;
    on_click(&state, LOCATE_BUTTON_ID, locate_and_capture)?;
    on_click(&state, PUZZLE_BUTTON_ID, generate_puzzle)?;
    on_click(&state, RESHUFFLE_BUTTON_ID, |st| reshuffle(&st))?;
    dnd::attach_drag_and_drop(state)
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;
    let search = window.location().search().unwrap_or_default();
    logger::init(logger::level_from_query(&search));

    let config = utils::load_config(&window);
    let (map, markers) = leaflet::init_map(MAP_ID, &config)?;

    let state = Rc::new(RefCell::new(State {
        window,
        document,
        map,
        markers,
        config,
        session: None,
    }));
    STATE.with(|st| st.replace(Some(state.clone())));

    generate_markers(&state)?;
    attach_ui(state)?;
    log::info!("map puzzle ready");
    Ok(())
}
