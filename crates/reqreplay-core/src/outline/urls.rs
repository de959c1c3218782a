//! `* URLs` section: one absolute URL per line.

use std::io::BufRead;

use url::Url;

use super::error::ParseError;
use super::matcher::section_marker;
use super::reader::LineReader;

/// Consume URL lines up to the next section marker of any depth (pushed back)
/// or end of input. Each line must parse as an absolute URL; the raw text is kept.
/// Control characters are rejected up front since `Url::parse` strips tabs
/// and newlines instead of failing, which would leave them in the raw text.
pub(crate) fn parse_urls<R: BufRead>(
    reader: &mut LineReader<R>,
    urls: &mut Vec<String>,
) -> Result<(), ParseError> {
    while let Some(line) = reader.next_line()? {
        if line.is_empty() {
            continue;
        }
        if section_marker(&line).is_some() {
            reader.push_back(line);
            return Ok(());
        }
        if line.contains(char::is_control) {
            return Err(ParseError::UrlControlChar {
                line_no: reader.line_no(),
                line,
            });
        }
        if let Err(source) = Url::parse(&line) {
            return Err(ParseError::Url {
                line_no: reader.line_no(),
                line,
                source,
            });
        }
        tracing::debug!(url = %line, "url");
        urls.push(line);
    }
    Ok(())
}
