//! Mustache-based `<thead>` fragment rendering
//!
//! Consumers that want ready-made markup instead of the raw grid can
//! render a complete `<thead>` fragment here. Content falls back from
//! label to key to a positional "Column N" placeholder, abbr becomes the
//! abbr attribute, and leaf cells carry their ancestor chain as a
//! data-headers attribute for accessibility wiring on data cells.

use super::classes::{cell_dom_id, headers_attr, HeaderStyleBuilder};
use crate::layout::grid::Grid;
use serde::Serialize;

/// Context data for template rendering
#[derive(Debug, Clone, Serialize)]
struct TheadContext {
    rows: Vec<RowContext>,
}

#[derive(Debug, Clone, Serialize)]
struct RowContext {
    cells: Vec<CellContext>,
}

#[derive(Debug, Clone, Serialize)]
struct CellContext {
    id: String,
    classes: String,
    colspan: u32,
    rowspan: u32,
    content: String,
    has_abbr: bool,
    abbr: String,
    has_headers: bool,
    headers: String,
    row_index: usize,
    col_index: usize,
}

/// Render a header grid as a `<thead>` markup fragment
pub fn render_thead(grid: &Grid) -> Result<String, Box<dyn std::error::Error>> {
    let styles = HeaderStyleBuilder::new();
    let context = TheadContext {
        rows: grid
            .rows
            .iter()
            .enumerate()
            .map(|(row_index, row)| RowContext {
                cells: row
                    .iter()
                    .enumerate()
                    .map(|(col_index, cell)| {
                        let headers = headers_attr(cell);
                        CellContext {
                            id: cell_dom_id(cell.id),
                            classes: styles.build_classes(cell).join(" "),
                            colspan: cell.colspan,
                            rowspan: cell.rowspan,
                            content: cell.display_text(col_index + 1),
                            has_abbr: cell.abbr.is_some(),
                            abbr: cell.abbr.clone().unwrap_or_default(),
                            has_headers: headers.is_some(),
                            headers: headers.unwrap_or_default(),
                            row_index,
                            col_index,
                        }
                    })
                    .collect(),
            })
            .collect(),
    };

    let template = mustache::compile_str(include_str!("templates/thead.html.mustache"))?;
    Ok(template.render_to_string(&context)?)
}
