//! Column Grid WASM API
//!
//! This module provides the JavaScript-facing API for the layout engine.
//! It includes shared utilities for serialization and error handling, plus
//! the layout entry points themselves.
//!
//! # Module Structure
//!
//! - `helpers`: Shared utilities for crossing the JS boundary
//! - `layout`: Layout and rendering entry points

pub mod helpers;
pub mod layout;

// Re-export all public functions to keep a flat public API
pub use layout::*;
