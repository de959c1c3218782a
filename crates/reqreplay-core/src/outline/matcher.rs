//! Line classification: section markers and `name: value` header lines.
//!
//! Pure functions over a single trimmed line; used by both sub-parsers and the
//! top-level assembler.

use super::error::ParseError;

/// Character that opens a section marker; the run length is the depth.
pub const MARKER_CHAR: char = '*';

/// A `*`-prefixed section line. Depth 1 is top level, depth 2 a sub-section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionMarker<'a> {
    pub depth: usize,
    pub title: &'a str,
}

impl SectionMarker<'_> {
    /// True if a sub-parser opened at `owner_depth` should consume this marker.
    /// Markers at or above the owner's depth belong to an enclosing parser.
    pub fn is_owned_by(&self, owner_depth: usize) -> bool {
        self.depth > owner_depth
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Section(SectionMarker<'a>),
    Header { name: &'a str, value: &'a str },
}

/// Matches `^\*+\s+(title)$`; the separator must be ASCII whitespace.
pub fn section_marker(line: &str) -> Option<SectionMarker<'_>> {
    let rest = line.trim_start_matches(MARKER_CHAR);
    let depth = line.len() - rest.len();
    if depth == 0 || !rest.starts_with(|c: char| c.is_ascii_whitespace()) {
        return None;
    }
    Some(SectionMarker {
        depth,
        title: rest.trim(),
    })
}

/// Matches `^([^:]+):\s*(.*)$`. The name is kept verbatim; only the value's
/// leading whitespace is stripped.
pub fn header_line(line: &str) -> Option<(&str, &str)> {
    let (name, value) = line.split_once(':')?;
    if name.is_empty() {
        return None;
    }
    Some((name, value.trim_start()))
}

/// Classify a non-empty line. Section markers take precedence over headers,
/// so `* Title: x` is a section.
pub fn classify(line: &str, line_no: usize) -> Result<LineKind<'_>, ParseError> {
    if let Some(marker) = section_marker(line) {
        return Ok(LineKind::Section(marker));
    }
    if let Some((name, value)) = header_line(line) {
        return Ok(LineKind::Header { name, value });
    }
    Err(ParseError::Syntax {
        line_no,
        line: line.to_string(),
    })
}
