use super::classify::{LineClass, classify_line};
use super::types::{Block, BlockKind};

/// Accumulates emitted blocks and assigns ids during one parse pass.
///
/// The id counter is shared across all kinds and scoped to the builder,
/// so ids are unique and strictly increasing in emission order but not
/// contiguous per kind. Emitted blocks are never revisited.
#[derive(Debug, Default)]
pub struct BlockBuilder {
    blocks: Vec<Block>,
    next_id: usize,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classifies one source line and emits its block, if any.
    pub fn push_line(&mut self, line: &str) {
        match classify_line(line) {
            LineClass::Blank => {}
            LineClass::Heading { level, text } => self.emit(BlockKind::Heading { level }, text),
            LineClass::ListItem { text } => self.emit(BlockKind::ListItem, text),
            LineClass::Body { text } => self.emit(BlockKind::Body, text),
        }
    }

    /// Consumes the builder, returning blocks in emission order.
    pub fn finish(self) -> Vec<Block> {
        self.blocks
    }

    fn emit(&mut self, kind: BlockKind, text: &str) {
        let id = format!("{}-{}", kind.tag(), self.next_id);
        self.next_id += 1;
        self.blocks.push(Block {
            kind,
            text: text.to_string(),
            id,
        });
    }
}
