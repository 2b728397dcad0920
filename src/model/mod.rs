//! Data model shared by the optimizer and its callers.
//!
//! Tokens and lines are produced by an external tokenizer, ranges by an
//! external sequence-comparison engine. This module only defines their shape
//! and the [`ChunkSequence`] view the optimizer compares through.

mod range;
mod sequence;
mod token;

pub use range::{Range, Side};
pub use sequence::{ChunkSequence, TextChunk, TextChunks};
pub use token::{Line, Token};
