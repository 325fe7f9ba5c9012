// <thead> markup rendering over built grids

use colgrid_wasm::models::ColumnSpec;
use colgrid_wasm::render::{cell_dom_id, headers_attr, render_thead, HeaderStyleBuilder};
use colgrid_wasm::ColumnLayoutEngine;

fn two_level_tree() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec::leaf("id").with_label("ID"),
        ColumnSpec::group(
            "name",
            vec![
                ColumnSpec::leaf("firstName").with_label("First Name"),
                ColumnSpec::leaf("lastName").with_label("Last Name"),
            ],
        )
        .with_label("Name"),
    ]
}

#[test]
fn test_thead_structure() {
    let grid = ColumnLayoutEngine::new()
        .build_layout(&two_level_tree())
        .unwrap();
    let html = render_thead(&grid).expect("rendering should succeed");

    assert!(html.starts_with("<thead>"), "fragment must open with <thead>");
    assert!(html.trim_end().ends_with("</thead>"), "fragment must close with </thead>");
    assert_eq!(html.matches("<tr>").count(), 2, "one <tr> per grid row");
    assert_eq!(html.matches("<th ").count(), 4, "one <th> per layout cell");

    // The grouping header spans both name parts for one row
    assert!(html.contains("colspan=\"2\" rowspan=\"1\""));
    // The shallow leaf reaches the bottom row
    assert!(html.contains("colspan=\"1\" rowspan=\"2\""));
}

#[test]
fn test_thead_ids_and_headers_attributes() {
    let grid = ColumnLayoutEngine::new()
        .build_layout(&two_level_tree())
        .unwrap();
    let html = render_thead(&grid).unwrap();

    let first = grid.find_by_key("firstName").unwrap();
    let name = grid.find_by_key("name").unwrap();

    assert!(html.contains(&format!("id=\"{}\"", cell_dom_id(first.id))));
    assert!(html.contains(&format!(
        "data-headers=\"{} {}\"",
        cell_dom_id(name.id),
        cell_dom_id(first.id)
    )));
    // Grouping headers carry no headers chain
    assert_eq!(headers_attr(name), None);
}

#[test]
fn test_thead_classes() {
    let grid = ColumnLayoutEngine::new()
        .build_layout(&two_level_tree())
        .unwrap();
    let html = render_thead(&grid).unwrap();

    assert!(html.contains("header-cell group col-name"));
    assert!(html.contains("header-cell leaf col-firstname"));
}

#[test]
fn test_dataset_positions() {
    let grid = ColumnLayoutEngine::new()
        .build_layout(&two_level_tree())
        .unwrap();
    let styles = HeaderStyleBuilder::new();
    let last = grid.find_by_key("lastName").unwrap();
    let dataset = styles.build_dataset(last, 1, 1);

    assert_eq!(dataset.get("rowIndex"), Some(&"1".to_string()));
    assert_eq!(dataset.get("colIndex"), Some(&"1".to_string()));
    assert!(dataset.contains_key("headers"));
}

#[test]
fn test_content_fallback_in_markup() {
    // label > key > positional placeholder
    let tree = vec![
        ColumnSpec::leaf("id").with_label("ID"),
        ColumnSpec::leaf("age"),
        ColumnSpec::default(),
    ];
    let grid = ColumnLayoutEngine::new().build_layout(&tree).unwrap();
    let html = render_thead(&grid).unwrap();

    assert!(html.contains(">ID</th>"));
    assert!(html.contains(">age</th>"));
    assert!(html.contains(">Column 3</th>"));
}
