// ABOUTME: Tree traversal helpers shared by all extractors.
// ABOUTME: Element-child enumeration plus a narrow by-id/by-tag/by-selector query surface.

use scraper::{ElementRef, Html, Selector};

/// Returns the direct children of `el` that are elements, in document order.
///
/// Text and comment nodes are discarded. This is the primitive every
/// extractor uses to turn "whatever children exist" into the structural
/// children that carry data; an element with no element children yields an
/// empty vec.
pub fn element_children<'a>(el: &ElementRef<'a>) -> Vec<ElementRef<'a>> {
    el.children().filter_map(ElementRef::wrap).collect()
}

/// Concatenated text content of an element and its descendants.
///
/// No whitespace normalization is applied; callers trim or split as their
/// field rules require (the compact-date rule depends on an embedded line
/// break surviving this step).
pub fn text_content(el: &ElementRef<'_>) -> String {
    el.text().collect()
}

/// Finds the first element with the given `id` attribute.
pub fn by_id<'a>(doc: &'a Html, id: &str) -> Option<ElementRef<'a>> {
    let selector = Selector::parse(&format!("[id='{}']", id)).ok()?;
    doc.select(&selector).next()
}

/// All elements with the given tag name, in document order.
pub fn by_tag<'a>(doc: &'a Html, tag: &str) -> Vec<ElementRef<'a>> {
    by_selector(doc, tag)
}

/// All elements matching a CSS selector, in document order.
///
/// An invalid selector yields no matches rather than an error; the callers
/// in this crate only pass fixed, known-good selectors.
pub fn by_selector<'a>(doc: &'a Html, css: &str) -> Vec<ElementRef<'a>> {
    match Selector::parse(css) {
        Ok(selector) => doc.select(&selector).collect(),
        Err(_) => Vec::new(),
    }
}
