//! Layout entry points exposed to JavaScript
//!
//! The intended usage is rebuild-on-change: whenever the column
//! specification changes, call `buildLayout` (or `renderThead`) again and
//! replace the previously rendered grid in full.

use crate::api::helpers::{columns_from_js, to_js_error};
use crate::layout::engine::ColumnLayoutEngine;
use crate::render::thead;
use wasm_bindgen::prelude::*;

/// Build the header grid for a column specification tree.
///
/// Accepts an array of column objects (`label`, `key`, `abbr`, `children`,
/// plus arbitrary extension fields) and returns the row-major grid with
/// colspan, rowspan, parent, and headers metadata per cell. Absent or
/// non-array input yields a grid with zero rows.
#[wasm_bindgen(js_name = buildLayout)]
pub fn build_layout(columns: JsValue) -> Result<JsValue, JsValue> {
    let tree = columns_from_js(columns);
    let grid = ColumnLayoutEngine::new()
        .build_layout(&tree)
        .map_err(to_js_error)?;
    web_sys::console::log_1(
        &format!(
            "[WASM] buildLayout: {} rows, {} leaf columns",
            grid.row_count(),
            grid.leaf_count()
        )
        .into(),
    );

    serde_wasm_bindgen::to_value(&grid)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Build the header grid and render it as a `<thead>` markup fragment
#[wasm_bindgen(js_name = renderThead)]
pub fn render_thead(columns: JsValue) -> Result<String, JsValue> {
    let tree = columns_from_js(columns);
    let grid = ColumnLayoutEngine::new()
        .build_layout(&tree)
        .map_err(to_js_error)?;

    thead::render_thead(&grid).map_err(to_js_error)
}
