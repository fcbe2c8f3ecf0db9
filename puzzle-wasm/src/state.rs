use std::cell::RefCell;
use std::rc::Rc;

use puzzle_core::{PuzzleConfig, PuzzleSession};
use web_sys::{Document, Window};

use crate::leaflet::{GeoJsonLayer, LeafletMap};

/// Global application state stored behind an `Rc<RefCell<_>>` so it can be
/// shared across the WASM callbacks.
pub struct State {
    pub window: Window,
    pub document: Document,
    pub map: LeafletMap,
    pub markers: GeoJsonLayer,
    pub config: PuzzleConfig,
    /// Active puzzle, if one has been generated since the view was cleared.
    pub session: Option<PuzzleSession>,
}

/// Thread local storage for the single runtime state instance.
thread_local! {
    pub static STATE: RefCell<Option<Rc<RefCell<State>>>> = const { RefCell::new(None) };
}
