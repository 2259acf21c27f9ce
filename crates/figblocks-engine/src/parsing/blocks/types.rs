use serde::ser::{Serialize, SerializeStruct, Serializer};

/// The kind of an exported block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// A heading line with its level (1-6).
    Heading {
        /// Number of `#` characters in the heading run.
        level: u8,
    },
    /// A single bullet line. Consecutive bullets stay separate blocks;
    /// grouping by visual proximity is deliberately not performed.
    ListItem,
    /// Default kind for any non-blank line that is neither heading nor
    /// list item.
    Body,
}

impl BlockKind {
    /// Wire tag for this kind, used both as the JSON `type` field and as
    /// the prefix of block ids.
    pub fn tag(&self) -> &'static str {
        match self {
            BlockKind::Heading { level: 1 } => "h1",
            BlockKind::Heading { level: 2 } => "h2",
            BlockKind::Heading { level: 3 } => "h3",
            BlockKind::Heading { level: 4 } => "h4",
            BlockKind::Heading { level: 5 } => "h5",
            BlockKind::Heading { .. } => "h6",
            BlockKind::ListItem => "list",
            BlockKind::Body => "body",
        }
    }
}

/// One classified unit of output corresponding to a single source line.
///
/// Blocks are immutable once emitted and live only in the `Vec` returned
/// by one parse call; nothing is cached or referenced across calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Classification of the source line.
    pub kind: BlockKind,
    /// Trimmed textual content of the line.
    pub text: String,
    /// Synthetic id, `"{tag}-{n}"` with one counter per parse call.
    pub id: String,
}

// Hand-written because the `type` tag depends on the heading level and
// `level` is only present for headings; derive cannot express either.
impl Serialize for Block {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let fields = match self.kind {
            BlockKind::Heading { .. } => 4,
            _ => 3,
        };
        let mut s = serializer.serialize_struct("Block", fields)?;
        s.serialize_field("type", self.kind.tag())?;
        if let BlockKind::Heading { level } = self.kind {
            s.serialize_field("level", &level)?;
        }
        s.serialize_field("text", &self.text)?;
        s.serialize_field("id", &self.id)?;
        s.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn heading_serializes_with_level() {
        let block = Block {
            kind: BlockKind::Heading { level: 2 },
            text: "Section".to_string(),
            id: "h2-0".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&block).unwrap(),
            json!({"type": "h2", "level": 2, "text": "Section", "id": "h2-0"})
        );
    }

    #[test]
    fn list_item_serializes_without_level() {
        let block = Block {
            kind: BlockKind::ListItem,
            text: "item".to_string(),
            id: "list-3".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&block).unwrap(),
            json!({"type": "list", "text": "item", "id": "list-3"})
        );
    }

    #[test]
    fn body_serializes_without_level() {
        let block = Block {
            kind: BlockKind::Body,
            text: "plain".to_string(),
            id: "body-1".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&block).unwrap(),
            json!({"type": "body", "text": "plain", "id": "body-1"})
        );
    }

    #[test]
    fn field_order_is_type_level_text_id() {
        let block = Block {
            kind: BlockKind::Heading { level: 1 },
            text: "Title".to_string(),
            id: "h1-0".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&block).unwrap(),
            r#"{"type":"h1","level":1,"text":"Title","id":"h1-0"}"#
        );
    }

    #[test]
    fn tags_cover_all_heading_levels() {
        for level in 1..=6 {
            let tag = BlockKind::Heading { level }.tag();
            assert_eq!(tag, format!("h{level}"));
        }
    }
}
