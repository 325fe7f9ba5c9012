//! Shared utilities for the JS boundary
//!
//! Input from JavaScript is untyped; the layout contract says unusable
//! shapes degrade rather than error, so conversion here is lenient: a
//! missing or non-array top-level value becomes an empty column sequence
//! and yields an empty grid downstream.

use crate::models::column::{columns_from_value, ColumnSpec};
use wasm_bindgen::prelude::*;

/// Convert a JS value into a column specification sequence.
///
/// Absent, null, or non-array values degrade to an empty sequence.
pub fn columns_from_js(value: JsValue) -> Vec<ColumnSpec> {
    if !js_sys::Array::is_array(&value) {
        return Vec::new();
    }
    match serde_wasm_bindgen::from_value::<serde_json::Value>(value) {
        Ok(json) => columns_from_value(json),
        Err(err) => {
            log::warn!("unusable column specification, treating as empty: {}", err);
            Vec::new()
        }
    }
}

/// Map any displayable error into a JsValue error string
pub fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}
