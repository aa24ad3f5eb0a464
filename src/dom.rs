//! Small query helpers over the live document.
//!
//! Everything here tolerates a missing window/document or a bad selector by
//! returning `None` / an empty list, so callers can skip wiring silently.

use wasm_bindgen::JsCast;
use web_sys::{window, Document, Element, NodeList};

pub fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

/// The `<html>` element.
pub fn root_element() -> Option<Element> {
    document().and_then(|d| d.document_element())
}

/// First element in the document matching `selector`.
pub fn qs(selector: &str) -> Option<Element> {
    document()?.query_selector(selector).ok().flatten()
}

/// All elements in the document matching `selector`, in document order.
pub fn qsa(selector: &str) -> Vec<Element> {
    match document() {
        Some(doc) => doc
            .query_selector_all(selector)
            .map(collect_elements)
            .unwrap_or_default(),
        None => Vec::new(),
    }
}

pub fn qs_in(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

pub fn qsa_in(root: &Element, selector: &str) -> Vec<Element> {
    root.query_selector_all(selector)
        .map(collect_elements)
        .unwrap_or_default()
}

/// Whether the given media query currently matches, e.g. `(pointer: coarse)`.
pub fn media_matches(query: &str) -> bool {
    window()
        .and_then(|w| w.match_media(query).ok().flatten())
        .map(|m| m.matches())
        .unwrap_or(false)
}

fn collect_elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}
