pub mod io;
pub mod parsing;

// Re-export key types for easier usage
pub use parsing::{Block, BlockKind, parse};
