use std::cell::RefCell;
use std::rc::Rc;

use puzzle_core::SwapOutcome;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{DragEvent, EventTarget, HtmlElement};

use crate::constants::{DRAG_FORMAT, IMAGES_ID, PIECE_SELECTOR, SLOT_KEY, SOLVED_MESSAGE};
use crate::render::refresh_puzzle;
use crate::state::State;

/// Slot of the puzzle piece under an event target, if any.
fn slot_of(target: Option<EventTarget>) -> Option<usize> {
    let el = target?.dyn_into::<web_sys::Element>().ok()?;
    let piece = el.closest(PIECE_SELECTOR).ok()??;
    let piece: HtmlElement = piece.dyn_into().ok()?;
    piece.dataset().get(SLOT_KEY)?.parse().ok()
}

/// Drag-and-drop for puzzle pieces, delegated from `#images` so the tiles
/// can be rebuilt freely after each swap.
pub fn attach_drag_and_drop(state: Rc<RefCell<State>>) -> Result<(), JsValue> {
    let root = state
        .borrow()
        .document
        .get_element_by_id(IMAGES_ID)
        .ok_or_else(|| JsValue::from_str("#images not found"))?;

    let dragstart = Closure::<dyn FnMut(DragEvent)>::wrap(Box::new(move |e: DragEvent| {
        if let Some(slot) = slot_of(e.target())
            && let Some(dt) = e.data_transfer()
            && let Err(err) = dt.set_data(DRAG_FORMAT, &slot.to_string())
        {
            log::warn!("could not start drag: {err:?}");
        }
    }));
    root.add_event_listener_with_callback("dragstart", dragstart.as_ref().unchecked_ref())?;
    dragstart.forget();

    let dragover = Closure::<dyn FnMut(DragEvent)>::wrap(Box::new(move |e: DragEvent| {
        if slot_of(e.target()).is_some() {
            e.prevent_default();
        }
    }));
    root.add_event_listener_with_callback("dragover", dragover.as_ref().unchecked_ref())?;
    dragover.forget();

    let st = state.clone();
    let ondrop = Closure::<dyn FnMut(DragEvent)>::wrap(Box::new(move |e: DragEvent| {
        e.prevent_default();
        let source = e
            .data_transfer()
            .and_then(|dt| dt.get_data(DRAG_FORMAT).ok())
            .and_then(|s| s.parse::<usize>().ok());
        let target = slot_of(e.target());
        let (Some(source), Some(target)) = (source, target) else {
            log::debug!("drop without a resolvable source or target");
            return;
        };
        handle_swap(&st, source, target);
    }));
    root.add_event_listener_with_callback("drop", ondrop.as_ref().unchecked_ref())?;
    ondrop.forget();
    Ok(())
}

fn handle_swap(state: &Rc<RefCell<State>>, source: usize, target: usize) {
    let mut s = state.borrow_mut();
    let s = &mut *s;
    let Some(session) = s.session.as_mut() else {
        return;
    };
    let outcome = session.swap(source, target);
    if outcome == SwapOutcome::Ignored {
        return;
    }
    if let Err(err) = refresh_puzzle(&s.document, session) {
        log::error!("failed to redraw puzzle: {err:?}");
    }
    if outcome == SwapOutcome::Solved {
        if let Err(err) = s.window.alert_with_message(SOLVED_MESSAGE) {
            log::warn!("could not show completion alert: {err:?}");
        }
    }
}
