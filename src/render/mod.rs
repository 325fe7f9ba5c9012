//! Header grid rendering
//!
//! This module layers markup concerns on top of the layout engine's grid:
//! CSS class and data-attribute generation per header cell, DOM id
//! formatting, and Mustache-based `<thead>` fragment rendering. The core
//! grid stays markup-agnostic; everything string-shaped lives here.

pub mod classes;
pub mod thead;

pub use classes::{cell_dom_id, headers_attr, HeaderStyleBuilder};
pub use thead::render_thead;
