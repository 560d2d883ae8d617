//! WASM bindings for mystex
//!
//! This module provides JavaScript-accessible escaping functions. `undefined`
//! and `null` inputs are treated as the empty string.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use serde::{Deserialize, Serialize};

/// Result of formatting index entries (exposed to WASM)
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
pub struct IndexResult {
    /// One `\index{...}` directive per entry
    pub directives: Vec<String>,
    /// Whether an index package is needed
    pub has_index: bool,
    /// Error message if the entries could not be read
    pub error: Option<String>,
}

/// Safely serialize a value to JsValue, returning `null` on failure.
#[cfg(feature = "wasm")]
fn to_js_value<T: Serialize>(value: &T) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap_or(JsValue::NULL)
}

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Escape prose for LaTeX text, with inline math where needed
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "stringToLatexText")]
pub fn escape_mixed_mode_wasm(input: Option<String>) -> String {
    crate::escape_mixed_mode(input.as_deref().unwrap_or_default())
}

/// Escape content of a math environment
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "stringToLatexMath")]
pub fn escape_math_only_wasm(input: Option<String>) -> String {
    crate::escape_math_only(input.as_deref().unwrap_or_default())
}

/// Escape a literal link target
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "hrefToLatexText")]
pub fn escape_for_link_target_wasm(input: Option<String>) -> String {
    crate::escape_for_link_target(input.as_deref().unwrap_or_default())
}

/// Replace no-break spaces and drop zero-width characters
///
/// # Arguments
/// * `input` - Text to clean
/// * `nbsp` - Replacement for no-break spaces (defaults to a plain space)
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "cleanWhitespaceChars")]
pub fn normalize_whitespace_wasm(input: Option<String>, nbsp: Option<String>) -> String {
    crate::normalize_whitespace(
        input.as_deref().unwrap_or_default(),
        nbsp.as_deref().unwrap_or(" "),
    )
}

/// Format index entries (array of `{ entry, subEntry?, emphasis? }`)
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "formatIndexEntries")]
pub fn format_index_entries_wasm(entries: JsValue) -> JsValue {
    let result = match serde_wasm_bindgen::from_value::<Vec<crate::IndexEntry>>(entries) {
        Ok(entries) => IndexResult {
            directives: entries.iter().map(crate::format_index_entry).collect(),
            has_index: !entries.is_empty(),
            error: None,
        },
        Err(e) => IndexResult {
            directives: vec![],
            has_index: false,
            error: Some(format!("Invalid index entries: {}", e)),
        },
    };
    to_js_value(&result)
}
