// Notify-and-rebuild contract between the column source and consumers

use colgrid_wasm::models::ColumnSpec;
use colgrid_wasm::{ColumnSource, GridHost};
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn test_set_columns_notifies_subscribers_with_fresh_grid() {
    let mut source = ColumnSource::new(vec![ColumnSpec::leaf("id")]);
    let seen_rows = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&seen_rows);
    source.subscribe(move |grid| sink.borrow_mut().push(grid.row_count()));

    source
        .set_columns(vec![ColumnSpec::group(
            "name",
            vec![ColumnSpec::leaf("first"), ColumnSpec::leaf("last")],
        )])
        .unwrap();
    source.set_columns(vec![]).unwrap();

    assert_eq!(*seen_rows.borrow(), vec![2, 0]);
}

#[test]
fn test_unsubscribe_stops_notifications() {
    let mut source = ColumnSource::new(Vec::new());
    let count = Rc::new(RefCell::new(0));

    let sink = Rc::clone(&count);
    let id = source.subscribe(move |_| *sink.borrow_mut() += 1);

    source.set_columns(vec![ColumnSpec::leaf("a")]).unwrap();
    assert!(source.unsubscribe(id));
    assert!(!source.unsubscribe(id), "second removal must report absence");
    source.set_columns(vec![ColumnSpec::leaf("b")]).unwrap();

    assert_eq!(*count.borrow(), 1);
}

#[test]
fn test_grid_host_swaps_wholesale() {
    let mut source = ColumnSource::new(vec![ColumnSpec::leaf("id")]);
    let host = Rc::new(RefCell::new(GridHost::new()));

    let sink = Rc::clone(&host);
    source.subscribe(move |grid| {
        sink.borrow_mut().swap(grid.clone());
    });

    assert!(host.borrow().grid().is_empty(), "host starts with an empty grid");

    source
        .set_columns(vec![
            ColumnSpec::leaf("id"),
            ColumnSpec::group("name", vec![ColumnSpec::leaf("first")]),
        ])
        .unwrap();

    assert_eq!(host.borrow().grid().row_count(), 2);
    assert_eq!(host.borrow().grid().leaf_count(), 2);
}

#[test]
fn test_build_without_notification() {
    let source = ColumnSource::new(vec![ColumnSpec::leaf("only")]);
    let grid = source.build().unwrap();
    assert_eq!(grid.row_count(), 1);
    assert_eq!(source.columns().len(), 1);
}
