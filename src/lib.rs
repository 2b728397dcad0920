//! **Boundary optimization for word- and line-level text diffs.**
//!
//! `diff-boundary` post-processes the alignment a sequence-comparison engine
//! computes between two tokenized documents, such as a license file and the
//! canonical text of that license. Whenever a repeated pattern makes the split
//! between unchanged and changed content ambiguous, the optimizer moves it to
//! where a reader expects it: onto whitespace for words, onto blank lines for
//! lines. The amount of content reported as unchanged never changes.
//!
//! Tokenizing documents and computing the initial alignment are left to the
//! caller; rendering the result is too.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: tokens, lines, [`Range`]s and the [`ChunkSequence`] view
//!   the optimizer compares through.
//! - **[`optimizer`]**: the [`ChunkOptimizer`] pass and its two strategies,
//!   [`WordShift`] and [`LineShift`].
//! - **[`alignment`]**: the [`FairAlignment`] result, which renderers walk to
//!   find changed regions.
//! - **[`progress`]**: cooperative cancellation.
//! - **[`config`]**: settings, presets and validation.
//!
//! ## Example: Moving a Deletion onto a Blank Line
//!
//! ```
//! use diff_boundary::model::{Line, Range, TextChunks};
//! use diff_boundary::optimizer::{optimize_lines, LineShift};
//! use diff_boundary::progress::NeverCancel;
//!
//! fn lines(text: &str) -> Vec<Line> {
//!     let mut start = 0;
//!     text.split('\n')
//!         .map(|part| {
//!             let non_space = part.chars().filter(|c| !c.is_whitespace()).count();
//!             let line = Line::new(start, start + part.len(), non_space);
//!             start += part.len() + 1;
//!             line
//!         })
//!         .collect()
//! }
//!
//! let old = "A\no\nZ\n\nA\nu\nZ\n\nA\nz\nZ";
//! let new = "A\no\nZ\n\nA\nz\nZ";
//! let (old_lines, new_lines) = (lines(old), lines(new));
//!
//! // The comparison engine deleted "u Z _ A" instead of the whole paragraph.
//! let fair = vec![Range::new(0, 5, 0, 5), Range::new(9, 11, 5, 7)];
//!
//! let optimized = optimize_lines(
//!     TextChunks::new(old, &old_lines),
//!     TextChunks::new(new, &new_lines),
//!     fair,
//!     LineShift::default(),
//!     &NeverCancel,
//! )?;
//!
//! // Now "A u Z _" is deleted: the change ends at the blank line.
//! assert_eq!(
//!     optimized.unchanged(),
//!     &[Range::new(0, 4, 0, 4), Range::new(8, 11, 4, 7)]
//! );
//! # Ok::<(), diff_boundary::OptimizeError>(())
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // Shifts are signed distances bounded by sequence lengths
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    // `old`/`new` and `range1`/`range2` are clear in context
    clippy::similar_names
)]

pub mod alignment;
pub mod compare;
pub mod config;
pub mod error;
pub mod model;
pub mod optimizer;
pub mod progress;

// Re-export main types for convenience
pub use alignment::{DiffFragment, FairAlignment};
pub use config::{ConfigError, ConfigPreset, Granularity, OptimizerConfig, Validatable};
pub use error::{InvalidAlignmentKind, OptimizeError, Result};
pub use model::{ChunkSequence, Line, Range, Side, TextChunks, Token};
pub use optimizer::{
    optimize, optimize_lines, optimize_words, ChunkOptimizer, Documents, LineShift,
    ShiftContext, ShiftStrategy, WordShift,
};
pub use progress::{CancellationFlag, NeverCancel, ProgressIndicator};
