//! Thin wrappers over the browser document.

use lumen_core::{CONFIG_ELEMENT_ID, Error, MarkerTarget, Result};
use tracing::warn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

/// A DOM element that carries reveal markers as CSS classes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomElement(Element);

impl DomElement {
    /// The underlying element.
    #[must_use]
    pub const fn as_element(&self) -> &Element {
        &self.0
    }
}

impl From<Element> for DomElement {
    fn from(element: Element) -> Self {
        Self(element)
    }
}

impl MarkerTarget for DomElement {
    fn add_marker(&self, marker: &str) {
        if let Err(e) = self.0.class_list().add_1(marker) {
            warn!("Failed to add class '{}': {}", marker, js_error_message(&e));
        }
    }

    fn has_marker(&self, marker: &str) -> bool {
        self.0.class_list().contains(marker)
    }
}

/// Best-effort text for a JavaScript exception.
pub fn js_error_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// The current document, if running in a browser window.
pub fn document() -> Option<Document> {
    web_sys::window().and_then(|window| window.document())
}

/// Path component of the current location, `/` if unavailable.
pub fn location_path() -> String {
    web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// Text of the embedded configuration block, if present.
pub fn embedded_config_source() -> Option<String> {
    document()?
        .get_element_by_id(CONFIG_ELEMENT_ID)?
        .text_content()
}

/// Look up the element the application mounts into.
///
/// # Errors
///
/// Returns [`Error::MountTargetMissing`] if no HTML element has that id.
pub fn mount_target(id: &str) -> Result<HtmlElement> {
    document()
        .and_then(|document| document.get_element_by_id(id))
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| Error::MountTargetMissing(id.to_string()))
}

/// Set the document title.
pub fn set_document_title(title: &str) {
    if let Some(document) = document() {
        document.set_title(title);
    }
}
