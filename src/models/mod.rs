//! Input data model for the column grid layout engine
//!
//! This module defines the caller-owned column specification tree
//! consumed by the layout engine.

pub mod column;

// Re-export commonly used types
pub use column::{columns_from_value, ColumnSpec};
