//! Utility modules for the column grid layout engine
//!
//! This module contains the error types shared across the crate.

pub mod error;

// Re-export commonly used types
pub use error::*;
