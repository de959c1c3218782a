use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure while replaying a document's URLs.
#[derive(Debug, Error)]
pub enum ReplayError {
    /// libcurl could not complete the transfer (DNS, connect, timeout, TLS, ...).
    #[error(transparent)]
    Curl(#[from] curl::Error),
    /// The document declares no headers for the requested method.
    #[error("no headers for method '{0}'")]
    MissingMethod(String),
    /// A capture file could not be written.
    #[error("failed to write {}", .path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
