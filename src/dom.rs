//! Checked access to the page the crate runs inside.
//!
//! Components never reach for `web_sys` lookups directly; everything the
//! page offers (document, pre-existing elements, the blocking alert) comes
//! through here so a missing piece turns into a typed error instead of a
//! silent `None`.

use web_sys::{Document, Element, Window};

use crate::errors::{Error, Result};

pub fn window() -> Result<Window> {
    web_sys::window().ok_or_else(|| Error::Dom(String::from("no window object")))
}

pub fn document() -> Result<Document> {
    window()?
        .document()
        .ok_or_else(|| Error::Dom(String::from("window has no document")))
}

/// Looks up the first element matching `selector`. The page is expected to
/// ship the element; absence is an error naming the selector.
pub fn query_selector(document: &Document, selector: &str) -> Result<Element> {
    document
        .query_selector(selector)
        .map_err(|e| Error::js("query_selector failed", e))?
        .ok_or_else(|| Error::MissingElement(selector.to_string()))
}

pub fn element_by_id(document: &Document, id: &str) -> Result<Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| Error::MissingElement(format!("#{id}")))
}

pub fn create_element(document: &Document, local_name: &str) -> Result<Element> {
    document
        .create_element(local_name)
        .map_err(|e| Error::js("create_element failed", e))
}

/// Blocking alert, the one user-facing error surface the page has.
pub fn alert(message: &str) -> Result<()> {
    window()?
        .alert_with_message(message)
        .map_err(|e| Error::js("alert failed", e))
}
