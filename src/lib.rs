//! Column Header Layout Engine WASM Module
//!
//! This is the main WASM module for the column grid layout engine.
//! It transforms a hierarchical column specification into a flat,
//! row-major header grid ready for `<thead>`-style rendering.

pub mod models;
pub mod layout;
pub mod render;
pub mod source;
pub mod utils;
pub mod api;

// Re-export commonly used types
pub use models::column::ColumnSpec;
pub use layout::engine::ColumnLayoutEngine;
pub use layout::grid::{Grid, LayoutCell};
pub use source::{ColumnSource, GridHost};
pub use utils::error::LayoutError;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    #[cfg(feature = "console_log")]
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    log::info!("Column grid layout WASM module initialized");
}
