//! Error type for outline parsing.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure while parsing an outline file. The first error aborts the parse;
/// no partial `Document` is ever returned alongside it.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The outline file could not be opened.
    #[error("failed to open {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The underlying stream failed mid-read.
    #[error("failed to read outline")]
    Read {
        #[source]
        source: io::Error,
    },
    /// Line is neither a section marker nor a header, or names an unknown section.
    #[error("line {line_no}: invalid line: '{line}'")]
    Syntax { line_no: usize, line: String },
    /// Line under `* URLs` is not a valid absolute URL.
    #[error("line {line_no}: invalid URL '{line}'")]
    Url {
        line_no: usize,
        line: String,
        #[source]
        source: url::ParseError,
    },
    /// Line under `* URLs` contains a control character (tab, CR, BEL, ...).
    #[error("line {line_no}: invalid URL '{line}': control character")]
    UrlControlChar { line_no: usize, line: String },
}

impl ParseError {
    pub fn is_syntax(&self) -> bool {
        matches!(self, ParseError::Syntax { .. })
    }

    pub fn is_url(&self) -> bool {
        matches!(
            self,
            ParseError::Url { .. } | ParseError::UrlControlChar { .. }
        )
    }

    /// The offending line text, for syntax and URL errors.
    pub fn line(&self) -> Option<&str> {
        match self {
            ParseError::Syntax { line, .. }
            | ParseError::Url { line, .. }
            | ParseError::UrlControlChar { line, .. } => Some(line),
            ParseError::Open { .. } | ParseError::Read { .. } => None,
        }
    }
}
