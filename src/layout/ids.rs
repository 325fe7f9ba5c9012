//! Cell id generation
//!
//! Header cell ids cross-reference data cells with their ancestor headers,
//! so they must be unique within the process lifetime. Ids are drawn from
//! a single process-wide atomic counter, which makes concurrent layout
//! builds safe without any locking in the traversal itself.

use crate::utils::error::LayoutError;
use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicU64, Ordering};

/// Process-wide generator of unique cell ids
pub struct CellIdGenerator {
    next: AtomicU64,
}

impl CellIdGenerator {
    fn new() -> Self {
        Self {
            next: AtomicU64::new(1),
        }
    }

    /// Reserve and return the next unique id.
    ///
    /// Fails only when the id space is exhausted; the counter then stays
    /// pinned at its ceiling so the fault is permanent rather than
    /// silently recycling ids.
    pub fn next_id(&self) -> Result<u64, LayoutError> {
        let mut current = self.next.load(Ordering::Relaxed);
        loop {
            if current == u64::MAX {
                return Err(LayoutError::IdSpaceExhausted);
            }
            match self.next.compare_exchange_weak(
                current,
                current + 1,
                Ordering::Relaxed,
                Ordering::Relaxed,
            ) {
                Ok(_) => return Ok(current),
                Err(actual) => current = actual,
            }
        }
    }
}

/// The shared id generator used by every layout build in this process
pub static CELL_IDS: Lazy<CellIdGenerator> = Lazy::new(CellIdGenerator::new);
