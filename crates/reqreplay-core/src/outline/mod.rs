//! Outline request files.
//!
//! A small line-oriented format declaring header sets keyed by HTTP method and
//! a list of URLs to replay:
//!
//! ```text
//! -*- mode: outline -*-
//! * Headers
//! ** GET
//! Accept: text/html
//! ** POST
//! Content-Type: application/json
//! * URLs
//! https://example.com/search?q=rust
//! ```
//!
//! Parsing is a recursive descent over trimmed lines with one line of
//! lookahead ([`reader::LineReader::push_back`]).

mod error;
mod headers;
pub mod matcher;
pub mod reader;
mod urls;

use serde::Serialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

pub use error::ParseError;
pub use headers::DEFAULT_METHOD;
use matcher::section_marker;
use reader::LineReader;

/// Header field name to value, for a single method.
pub type HeaderMap = BTreeMap<String, String>;

/// Prefix of a front-matter line such as an Emacs mode line.
const FRONT_MATTER_PREFIX: &str = "-*-";
const HEADERS_TITLE: &str = "Headers";
const URLS_TITLE: &str = "URLs";

/// Parsed outline file: URLs in file order plus header maps keyed by method.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    pub urls: Vec<String>,
    pub headers: BTreeMap<String, HeaderMap>,
}

impl Document {
    /// Headers declared for `method` (case-sensitive, as written in the file).
    pub fn headers_for(&self, method: &str) -> Option<&HeaderMap> {
        self.headers.get(method)
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty() && self.headers.is_empty()
    }
}

/// Parse the outline file at `path`. The file is closed before returning.
pub fn parse_file(path: &Path) -> Result<Document, ParseError> {
    let file = File::open(path).map_err(|source| ParseError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let doc = parse_reader(BufReader::new(file))?;
    tracing::debug!(
        path = %path.display(),
        urls = doc.urls.len(),
        methods = doc.headers.len(),
        "parsed outline"
    );
    Ok(doc)
}

pub fn parse_str(input: &str) -> Result<Document, ParseError> {
    parse_reader(input.as_bytes())
}

/// Top-level loop: skips blank lines and front matter, then hands `* Headers`
/// and `* URLs` sections to their sub-parsers. Sub-parsers consume every line
/// up to the next marker, so front matter is only ever seen before the first
/// section.
pub fn parse_reader<R: BufRead>(input: R) -> Result<Document, ParseError> {
    let mut reader = LineReader::new(input);
    let mut doc = Document::default();

    while let Some(line) = reader.next_line()? {
        if line.is_empty() {
            continue;
        }
        if line.starts_with(FRONT_MATTER_PREFIX) {
            continue;
        }
        let title = match section_marker(&line) {
            Some(marker) if marker.depth == 1 => marker.title,
            _ => {
                return Err(ParseError::Syntax {
                    line_no: reader.line_no(),
                    line,
                })
            }
        };
        if title.starts_with(HEADERS_TITLE) {
            headers::parse_headers(&mut reader, &mut doc.headers)?;
        } else if title.starts_with(URLS_TITLE) {
            urls::parse_urls(&mut reader, &mut doc.urls)?;
        } else {
            return Err(ParseError::Syntax {
                line_no: reader.line_no(),
                line,
            });
        }
    }

    Ok(doc)
}
