use regex::Regex;
use std::sync::OnceLock;

/// List-item block type with owned syntax knowledge.
///
/// A list item is a line starting, after any amount of leading
/// whitespace, with one of the marker characters followed by at least one
/// whitespace character and then at least one non-whitespace character.
/// Each matching line stands alone; indentation depth is not interpreted.
pub struct ListItem;

impl ListItem {
    /// Recognized bullet marker characters.
    pub const MARKERS: [char; 3] = ['-', '*', '+'];

    /// Matches a list-item line, returning its trimmed text. `None` when
    /// the line is not a list item.
    pub fn sig(line: &str) -> Option<&str> {
        static LIST_REGEX: OnceLock<Regex> = OnceLock::new();
        let re = LIST_REGEX
            .get_or_init(|| Regex::new(r"^\s*[-*+]\s+(\S.*)$").expect("Invalid list regex"));

        let caps = re.captures(line)?;
        Some(caps.get(1)?.as_str().trim())
    }
}
