use regex::Regex;
use std::sync::OnceLock;

/// Heading block type with owned syntax knowledge.
///
/// All heading-related syntax rules live here, not in classifier code:
/// the `#` run must start at the very first byte of the line, be 1 to 6
/// characters long, and be followed by at least one whitespace character
/// and then at least one non-whitespace character. A run of 7+ hashes is
/// not a heading and falls through to body classification.
pub struct Heading;

impl Heading {
    /// Deepest heading level recognized.
    pub const MAX_LEVEL: u8 = 6;

    /// Matches a heading line, returning `(level, text)` with the text
    /// trimmed. `None` when the line is not a heading.
    pub fn sig(line: &str) -> Option<(u8, &str)> {
        static HEADING_REGEX: OnceLock<Regex> = OnceLock::new();
        let re = HEADING_REGEX
            .get_or_init(|| Regex::new(r"^(#{1,6})\s+(\S.*)$").expect("Invalid heading regex"));

        let caps = re.captures(line)?;
        let level = caps.get(1)?.as_str().len() as u8;
        let text = caps.get(2)?.as_str().trim();
        Some((level, text))
    }
}
