//! `* Headers` section: per-method header maps.

use std::collections::BTreeMap;
use std::io::BufRead;

use super::error::ParseError;
use super::matcher::{classify, LineKind};
use super::reader::LineReader;
use super::HeaderMap;

/// Method that header lines are filed under until a `** METHOD` sub-section appears.
pub const DEFAULT_METHOD: &str = "GET";

/// Depth of the `* Headers` marker itself; deeper markers name methods.
const OWNER_DEPTH: usize = 1;

/// Consume lines up to the next top-level section (pushed back) or end of input.
/// Duplicate field names under one method keep the last value.
pub(crate) fn parse_headers<R: BufRead>(
    reader: &mut LineReader<R>,
    headers: &mut BTreeMap<String, HeaderMap>,
) -> Result<(), ParseError> {
    let mut method = DEFAULT_METHOD.to_string();

    while let Some(line) = reader.next_line()? {
        if line.is_empty() {
            continue;
        }
        let kind = classify(&line, reader.line_no())?;
        match kind {
            LineKind::Section(marker) if !marker.is_owned_by(OWNER_DEPTH) => {
                reader.push_back(line);
                return Ok(());
            }
            LineKind::Section(marker) => {
                tracing::debug!(depth = marker.depth, method = marker.title, "header method");
                method = marker.title.to_string();
            }
            LineKind::Header { name, value } => {
                tracing::debug!(%method, "{}: {}", name, value);
                headers
                    .entry(method.clone())
                    .or_default()
                    .insert(name.to_string(), value.to_string());
            }
        }
    }
    Ok(())
}
