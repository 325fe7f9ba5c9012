//! Header grid output structures
//!
//! This module defines the output structure returned from the layout engine
//! to JavaScript. The Grid contains all pre-calculated spans, ancestor
//! chains, and passthrough column fields needed to render a multi-row
//! header without any layout calculations.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Row-major header grid: an ordered sequence of rows, each an ordered
/// sequence of cells in left-to-right document order
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Grid {
    /// Header rows, shallowest first; row count = 1 + max nesting depth
    pub rows: Vec<Vec<LayoutCell>>,
}

/// One header cell, produced per input column node
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LayoutCell {
    /// Unique stable identifier for this build
    pub id: u64,

    /// Number of leaf columns this cell horizontally spans
    pub colspan: u32,

    /// Number of grid rows this cell vertically spans
    pub rowspan: u32,

    /// Id of the enclosing cell, None for top-level cells
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<u64>,

    /// Root-to-leaf ancestor ids followed by this cell's own id.
    /// Present only on leaf cells; length = depth + 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<Vec<u64>>,

    /// Display text passed through from the column specification
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Field correlation key passed through from the column specification
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// Accessibility abbreviation passed through from the column specification
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abbr: Option<String>,

    /// Extension fields passed through verbatim for template substitution
    #[serde(flatten)]
    pub extensions: HashMap<String, serde_json::Value>,
}

impl Grid {
    /// Number of header rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Whether the grid has no rows at all
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of physical leaf columns (the width of every row in
    /// leaf-column units)
    pub fn leaf_count(&self) -> u32 {
        self.rows
            .first()
            .map(|row| row.iter().map(|cell| cell.colspan).sum())
            .unwrap_or(0)
    }

    /// Iterate over every cell in row-major order
    pub fn cells(&self) -> impl Iterator<Item = &LayoutCell> {
        self.rows.iter().flatten()
    }

    /// Find the first cell carrying the given key
    pub fn find_by_key(&self, key: &str) -> Option<&LayoutCell> {
        self.cells().find(|cell| cell.key.as_deref() == Some(key))
    }
}

impl LayoutCell {
    /// Whether this cell represents a leaf column
    pub fn is_leaf(&self) -> bool {
        self.headers.is_some()
    }

    /// Display content with fallback: label if present, else key, else a
    /// positional placeholder from the cell's 1-based position within its row
    pub fn display_text(&self, position_in_row: usize) -> String {
        if let Some(label) = &self.label {
            label.clone()
        } else if let Some(key) = &self.key {
            key.clone()
        } else {
            format!("Column {}", position_in_row)
        }
    }
}
