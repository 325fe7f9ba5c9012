//! Notify-and-rebuild contract around the layout engine
//!
//! The column specification has one source of truth; every change runs a
//! full layout rebuild and hands the fresh grid to each subscriber, which
//! swaps its previous grid wholesale. There is no incremental diffing: a
//! grid is cheap to rebuild and consumers replace what they rendered.

use crate::layout::engine::ColumnLayoutEngine;
use crate::layout::grid::Grid;
use crate::models::column::ColumnSpec;
use crate::utils::error::LayoutError;

/// Handle identifying one subscription, for later removal
pub type SubscriptionId = usize;

/// Source of truth for the column specification.
///
/// Owns the current columns and the subscriber list; `set_columns`
/// rebuilds the grid once and notifies every subscriber with it.
pub struct ColumnSource {
    columns: Vec<ColumnSpec>,
    engine: ColumnLayoutEngine,
    subscribers: Vec<(SubscriptionId, Box<dyn FnMut(&Grid)>)>,
    next_subscription: SubscriptionId,
}

impl ColumnSource {
    /// Create a source with an initial column specification
    pub fn new(columns: Vec<ColumnSpec>) -> Self {
        Self {
            columns,
            engine: ColumnLayoutEngine::new(),
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Current column specification
    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    /// Build a grid from the current columns without notifying anyone
    pub fn build(&self) -> Result<Grid, LayoutError> {
        self.engine.build_layout(&self.columns)
    }

    /// Register a callback invoked with the fresh grid after every change
    pub fn subscribe(&mut self, callback: impl FnMut(&Grid) + 'static) -> SubscriptionId {
        let id = self.next_subscription;
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a subscription; returns false if it was already gone
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }

    /// Replace the column specification, rebuild the grid, and notify
    /// every subscriber with it.
    ///
    /// On a failed build no subscriber is notified, so consumers keep
    /// whatever grid they rendered last.
    pub fn set_columns(&mut self, columns: Vec<ColumnSpec>) -> Result<(), LayoutError> {
        self.columns = columns;
        let grid = match self.engine.build_layout(&self.columns) {
            Ok(grid) => grid,
            Err(err) => {
                log::error!("layout rebuild failed, keeping previous grid: {}", err);
                return Err(err);
            }
        };
        for (_, callback) in &mut self.subscribers {
            callback(&grid);
        }
        Ok(())
    }
}

/// Consumer-side holder of the latest grid.
///
/// Demonstrates the atomic-swap pattern: the previous grid is replaced
/// wholesale, never patched.
#[derive(Default)]
pub struct GridHost {
    grid: Grid,
}

impl GridHost {
    /// Create a host with an empty grid
    pub fn new() -> Self {
        Self::default()
    }

    /// The grid currently held
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Swap in a fresh grid, returning the one it replaces
    pub fn swap(&mut self, grid: Grid) -> Grid {
        std::mem::replace(&mut self.grid, grid)
    }
}
