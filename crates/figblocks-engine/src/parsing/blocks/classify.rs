use super::kinds::{Heading, ListItem};

/// Classification of a single line containing only local facts.
///
/// Each line is classified independently without reference to surrounding
/// context, so blank lines never flush or reset anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// Whitespace-only line; contributes no block.
    Blank,
    /// `#` run anchored at the start of the line, level 1-6.
    Heading { level: u8, text: &'a str },
    /// Bullet line; leading whitespace before the marker is tolerated.
    ListItem { text: &'a str },
    /// Any other non-blank line; carries the trimmed line.
    Body { text: &'a str },
}

/// Classifies one line. First match wins: heading, then list item, then
/// body. Exactly one classification per line.
///
/// Trailing carriage returns are stripped first so CRLF input behaves the
/// same as LF input.
pub fn classify_line(line: &str) -> LineClass<'_> {
    let line = line.trim_end_matches(['\r', '\n']);
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return LineClass::Blank;
    }

    if let Some((level, text)) = Heading::sig(line) {
        return LineClass::Heading { level, text };
    }
    if let Some(text) = ListItem::sig(line) {
        return LineClass::ListItem { text };
    }
    LineClass::Body { text: trimmed }
}
