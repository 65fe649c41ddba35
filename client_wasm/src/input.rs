//! Pointer and difficulty-selector input

use game_core::{Difficulty, GameError};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement, HtmlSelectElement, MouseEvent};

/// Id of the `<select>` holding easy / medium / hard
pub const DIFFICULTY_SELECT_ID: &str = "difficulty";

/// Pointer y in the same space as the canvas bounding rect
pub fn pointer_y(event: &MouseEvent) -> f32 {
    event.client_y() as f32
}

/// Current top of the canvas, which moves when the page scrolls
pub fn surface_top(canvas: &HtmlCanvasElement) -> f32 {
    canvas.get_bounding_client_rect().top() as f32
}

/// Read the selector; a missing element counts as the default level
pub fn read_difficulty(document: &Document) -> Result<Difficulty, GameError> {
    match document
        .get_element_by_id(DIFFICULTY_SELECT_ID)
        .and_then(|el| el.dyn_into::<HtmlSelectElement>().ok())
    {
        Some(select) => select.value().parse(),
        None => Ok(Difficulty::default()),
    }
}
