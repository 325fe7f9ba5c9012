//! Error types for the layout engine
//!
//! The layout transform is total over structural input: malformed children
//! sequences degrade to leaf treatment during deserialization and never
//! surface here. The only fatal condition is exhaustion of the id space,
//! which is an infrastructure fault rather than a data error.

use thiserror::Error;

/// Top-level layout error type
#[derive(Debug, Clone, Error)]
pub enum LayoutError {
    /// The process-wide cell id generator has no ids left.
    /// Unrecoverable: uniqueness of header ids is an invariant the rest
    /// of the system depends on.
    #[error("cell id space exhausted")]
    IdSpaceExhausted,
}
