//! Two-pass tree-to-grid layout computation
//!
//! Pass 1 walks the column tree depth-first, assigns ids, aggregates
//! colspan bottom-up (a leaf spans one column, an internal node the sum of
//! its children), and measures the deepest nesting level. Pass 2 walks the
//! same shape again, appending each node to the output row at its depth,
//! inflating leaf rowspans so every leaf reaches the final row, and
//! collecting the root-to-leaf ancestor id chain for each leaf.
//!
//! Both passes are driven by an explicit stack of (node-sequence, cursor)
//! frames, so arbitrarily deep specifications never hit a recursion limit.

use crate::layout::grid::{Grid, LayoutCell};
use crate::layout::ids::CELL_IDS;
use crate::models::column::ColumnSpec;
use crate::utils::error::LayoutError;

/// The layout engine: a pure, deterministic transform from a column
/// specification tree to a header grid. Holds no state between calls;
/// id uniqueness comes from the process-wide generator.
pub struct ColumnLayoutEngine;

/// Per-node bookkeeping accumulated during pass 1
struct WorkNode<'a> {
    spec: &'a ColumnSpec,
    id: u64,
    depth: usize,
    parent: Option<usize>,
    colspan: u32,
    children: Vec<usize>,
}

/// Traversal frame for pass 1: a sibling sequence from the input tree
struct SpecFrame<'a> {
    nodes: &'a [ColumnSpec],
    cursor: usize,
    parent: Option<usize>,
}

impl ColumnLayoutEngine {
    /// Create a new layout engine
    pub fn new() -> Self {
        Self
    }

    /// Compute the header grid for a column specification tree.
    ///
    /// The input is borrowed immutably and never modified; every computed
    /// field lives in the returned grid. An empty tree yields a grid with
    /// zero rows. The only failure is exhaustion of the id space.
    pub fn build_layout(&self, tree: &[ColumnSpec]) -> Result<Grid, LayoutError> {
        let mut arena: Vec<WorkNode> = Vec::new();
        let mut roots: Vec<usize> = Vec::new();
        let mut total_rows = 0usize;

        // Pass 1: id assignment, colspan aggregation, depth measurement
        let mut stack = vec![SpecFrame {
            nodes: tree,
            cursor: 0,
            parent: None,
        }];

        loop {
            let depth = stack.len().saturating_sub(1);
            let Some(frame) = stack.last_mut() else {
                break;
            };
            if frame.cursor < frame.nodes.len() {
                let nodes = frame.nodes;
                let spec = &nodes[frame.cursor];
                let parent = frame.parent;
                frame.cursor += 1;

                let index = arena.len();
                arena.push(WorkNode {
                    spec,
                    id: CELL_IDS.next_id()?,
                    depth,
                    parent,
                    colspan: 1,
                    children: Vec::new(),
                });
                match parent {
                    Some(p) => arena[p].children.push(index),
                    None => roots.push(index),
                }
                total_rows = total_rows.max(depth + 1);

                if !spec.children.is_empty() {
                    stack.push(SpecFrame {
                        nodes: &spec.children,
                        cursor: 0,
                        parent: Some(index),
                    });
                }
            } else {
                // Sibling sequence fully processed: fold the children's
                // colspans into the enclosing node.
                if let Some(parent) = stack.pop().and_then(|f| f.parent) {
                    arena[parent].colspan = arena[parent]
                        .children
                        .iter()
                        .map(|&child| arena[child].colspan)
                        .sum();
                }
            }
        }

        // Pass 2: row assignment, rowspan finalization, ancestor chains
        let mut rows: Vec<Vec<LayoutCell>> = (0..total_rows).map(|_| Vec::new()).collect();
        let mut chain: Vec<u64> = Vec::new();
        let mut walk: Vec<(&[usize], usize)> = vec![(&roots, 0)];

        while let Some(frame) = walk.last_mut() {
            if frame.1 < frame.0.len() {
                let index = frame.0[frame.1];
                frame.1 += 1;

                let node = &arena[index];
                let is_leaf = node.children.is_empty();
                let rowspan = if is_leaf {
                    (total_rows - node.depth) as u32
                } else {
                    1
                };
                let headers = is_leaf.then(|| {
                    let mut ids = chain.clone();
                    ids.push(node.id);
                    ids
                });

                rows[node.depth].push(LayoutCell {
                    id: node.id,
                    colspan: node.colspan,
                    rowspan,
                    parent: node.parent.map(|p| arena[p].id),
                    headers,
                    label: node.spec.label.clone(),
                    key: node.spec.key.clone(),
                    abbr: node.spec.abbr.clone(),
                    extensions: node.spec.extensions.clone(),
                });

                if !is_leaf {
                    chain.push(node.id);
                    walk.push((&arena[index].children, 0));
                }
            } else {
                walk.pop();
                // The root frame contributed nothing to the ancestor chain.
                if !walk.is_empty() {
                    chain.pop();
                }
            }
        }

        Ok(Grid { rows })
    }
}

impl Default for ColumnLayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}
