//! Column Grid Layout Engine
//!
//! This module computes the header grid for `<thead>`-style rendering,
//! transforming a hierarchical column specification into a flat, row-major
//! sequence of header rows with colspan, rowspan, and ancestor-chain data.

pub mod engine;
pub mod grid;
pub mod ids;

pub use engine::ColumnLayoutEngine;
pub use grid::{Grid, LayoutCell};
pub use ids::CELL_IDS;
