//! Cell-level styling and identifier formatting
//!
//! This module handles CSS class generation, data attribute building, and
//! the string shape of cell DOM ids. The layout engine only guarantees id
//! uniqueness; the `colgrid-cell-<n>` format is a rendering choice.

use crate::layout::grid::LayoutCell;
use std::collections::HashMap;

/// Format a cell id as a DOM id attribute value
pub fn cell_dom_id(id: u64) -> String {
    format!("colgrid-cell-{}", id)
}

/// Space-separated DOM ids of a leaf's header chain, for use as the
/// headers attribute of data cells under that leaf column
pub fn headers_attr(cell: &LayoutCell) -> Option<String> {
    cell.headers.as_ref().map(|ids| {
        ids.iter()
            .map(|&id| cell_dom_id(id))
            .collect::<Vec<_>>()
            .join(" ")
    })
}

/// Builder for header cell styling
pub struct HeaderStyleBuilder;

impl HeaderStyleBuilder {
    /// Create a new header style builder
    pub fn new() -> Self {
        Self
    }

    /// Build CSS classes for one header cell
    pub fn build_classes(&self, cell: &LayoutCell) -> Vec<String> {
        let mut classes = vec!["header-cell".to_string()];
        classes.push(if cell.is_leaf() {
            "leaf".to_string()
        } else {
            "group".to_string()
        });
        if let Some(key) = &cell.key {
            classes.push(format!("col-{}", Self::css_slug(key)));
        }
        classes
    }

    /// Build data attributes for one header cell
    pub fn build_dataset(
        &self,
        cell: &LayoutCell,
        row_index: usize,
        col_index: usize,
    ) -> HashMap<String, String> {
        let mut dataset = HashMap::new();
        dataset.insert("rowIndex".to_string(), row_index.to_string());
        dataset.insert("colIndex".to_string(), col_index.to_string());
        dataset.insert("colspan".to_string(), cell.colspan.to_string());
        if let Some(headers) = headers_attr(cell) {
            dataset.insert("headers".to_string(), headers);
        }
        dataset
    }

    /// Reduce a column key to a CSS-safe class fragment
    fn css_slug(key: &str) -> String {
        key.chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() {
                    c.to_ascii_lowercase()
                } else {
                    '-'
                }
            })
            .collect()
    }
}

impl Default for HeaderStyleBuilder {
    fn default() -> Self {
        Self::new()
    }
}
