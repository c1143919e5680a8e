//! Typed DOM lookups (WASM only)

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Window};

use crate::error::WebError;

pub fn window() -> Result<Window, WebError> {
    web_sys::window().ok_or(WebError::NoWindow)
}

pub fn document() -> Result<Document, WebError> {
    window()?.document().ok_or(WebError::NoDocument)
}

/// Find an element by id
pub fn element(id: &str) -> Result<Element, WebError> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| WebError::MissingElement(id.to_string()))
}

/// Find an element by id and cast it to a concrete type
pub fn element_as<T: JsCast>(id: &str) -> Result<T, WebError> {
    element(id)?
        .dyn_into::<T>()
        .map_err(|_| WebError::WrongElementType(id.to_string()))
}
