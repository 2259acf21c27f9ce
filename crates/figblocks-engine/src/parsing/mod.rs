//! # Block Parsing
//!
//! Single-pass line classification of a Markdown document into an ordered
//! block sequence for design-tool handoff.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): Each line is classified
//!    independently into a `LineClass` containing local facts (heading level,
//!    list marker, blank status). No state crosses lines.
//!
//! 2. **Block Emission** (`builder`): A `BlockBuilder` assigns ids from a
//!    single counter and emits one [`Block`] per non-blank line.
//!
//! ## Key Invariants
//!
//! - Blocks are emitted in source-line order.
//! - Blank lines emit nothing and flush nothing.
//! - Ids are unique and strictly increasing within one parse call; the
//!   counter is shared across kinds, so per-kind ids are not contiguous.
//! - Parsing is total: every input string yields a block sequence.

pub mod blocks;

pub use blocks::{Block, BlockBuilder, BlockKind, LineClass, classify_line};

/// Parses a Markdown document into its ordered block sequence.
///
/// Pure and total: no I/O, no shared state, and no failure mode. Every
/// non-blank line maps to exactly one block; classification precedence is
/// heading, then list item, then body.
pub fn parse(markdown: &str) -> Vec<Block> {
    let mut builder = BlockBuilder::new();
    for line in markdown.split('\n') {
        builder.push_line(line);
    }
    builder.finish()
}
