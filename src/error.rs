//! Error types for diff-boundary.
//!
//! The optimizer is a total function over a well-formed alignment, so the
//! only errors are cancellation, a caller handing in a broken alignment, and
//! rejected configuration.

use crate::config::ConfigError;
use crate::model::Range;
use thiserror::Error;

/// Main error type for diff-boundary operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum OptimizeError {
    /// The progress indicator asked the pass to stop
    #[error("Optimization was cancelled")]
    Cancelled,

    /// The input alignment broke the fair-alignment contract
    #[error("Invalid alignment at range #{index} ({range}): {kind}")]
    InvalidAlignment {
        index: usize,
        range: Range,
        #[source]
        kind: InvalidAlignmentKind,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Ways an input range can violate the fair-alignment contract.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InvalidAlignmentKind {
    #[error("start is after end")]
    Inverted,

    #[error("range is empty")]
    Empty,

    #[error("span lengths differ ({len1} vs {len2})")]
    UnequalLength { len1: usize, len2: usize },

    #[error("range ends past sequence length {length}")]
    OutOfBounds { length: usize },

    #[error("range overlaps or precedes the previous range {previous}")]
    Overlapping { previous: Range },
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for diff-boundary operations
pub type Result<T> = std::result::Result<T, OptimizeError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl OptimizeError {
    /// Create an invalid alignment error for the range at `index`
    pub const fn invalid_alignment(index: usize, range: Range, kind: InvalidAlignmentKind) -> Self {
        Self::InvalidAlignment { index, range, kind }
    }

    /// Returns true when the pass was stopped by its progress indicator.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}
