//! Block classification and emission.
//!
//! ## Modules
//!
//! - **`types`**: Core types ([`Block`], [`BlockKind`]) and the wire-format
//!   serialization
//! - **`kinds`**: Block-specific types with owned syntax knowledge
//!   (Heading, ListItem)
//! - **`classify`**: `classify_line` produces a [`LineClass`] for each line
//! - **`builder`**: [`BlockBuilder`] assigns ids and accumulates blocks

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, classify_line};
pub use types::{Block, BlockKind};
