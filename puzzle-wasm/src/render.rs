use puzzle_core::{Image, PuzzleSession, TileView, tile_views};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement};

use crate::constants::{IMAGES_ID, PIECE_CLASS, PUZZLE_CONTAINER_ID, SLOT_KEY};

fn images_root(document: &Document) -> Result<Element, JsValue> {
    document
        .get_element_by_id(IMAGES_ID)
        .ok_or_else(|| JsValue::from_str("#images not found"))
}

/// Append a captured image, wrapped in a `div`, below earlier captures.
pub fn append_capture(document: &Document, image: &Image) -> Result<(), JsValue> {
    let img = document
        .create_element("img")?
        .dyn_into::<web_sys::HtmlImageElement>()?;
    img.set_src(image.source());
    img.set_width(image.width());
    img.set_height(image.height());
    let wrapper = document.create_element("div")?;
    wrapper.append_child(&img)?;
    images_root(document)?.append_child(&wrapper)?;
    Ok(())
}

/// Replace everything under `#images` with a fresh puzzle container.
pub fn show_puzzle(document: &Document, session: &PuzzleSession) -> Result<(), JsValue> {
    let root = images_root(document)?;
    root.set_inner_html("");
    let container = document
        .create_element("div")?
        .dyn_into::<HtmlElement>()?;
    container.set_id(PUZZLE_CONTAINER_ID);
    let style = container.style();
    style.set_property("display", "grid")?;
    style.set_property(
        "grid-template-columns",
        &format!("repeat({}, max-content)", session.cols()),
    )?;
    root.append_child(&container)?;
    fill_container(document, &container, session)
}

/// Rebuild the tiles of the existing container from the board.
pub fn refresh_puzzle(document: &Document, session: &PuzzleSession) -> Result<(), JsValue> {
    match document.get_element_by_id(PUZZLE_CONTAINER_ID) {
        Some(container) => fill_container(document, &container, session),
        None => show_puzzle(document, session),
    }
}

fn fill_container(
    document: &Document,
    container: &Element,
    session: &PuzzleSession,
) -> Result<(), JsValue> {
    container.set_inner_html("");
    let background = format!("url({})", session.image().source());
    for view in tile_views(session) {
        let piece = tile_element(document, &view, &background)?;
        container.append_child(&piece)?;
    }
    Ok(())
}

fn tile_element(document: &Document, view: &TileView, background: &str) -> Result<HtmlElement, JsValue> {
    let piece = document
        .create_element("div")?
        .dyn_into::<HtmlElement>()?;
    piece.set_class_name(PIECE_CLASS);
    piece.set_draggable(true);
    piece.dataset().set(SLOT_KEY, &view.slot.to_string())?;
    let style = piece.style();
    style.set_property("width", &format!("{}px", view.width_px))?;
    style.set_property("height", &format!("{}px", view.height_px))?;
    style.set_property("background-image", background)?;
    style.set_property("background-size", &view.background_size)?;
    style.set_property("background-position", &view.background_position)?;
    Ok(piece)
}
