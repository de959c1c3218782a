//! Replay a parsed outline: send each URL with one method's headers and
//! persist the response headers and body next to the outline file.

mod capture;
mod error;
mod parse;
mod transport;

use std::path::Path;

use crate::outline::{Document, HeaderMap};
use crate::retry::{run_with_retry, RetryPolicy};

pub use capture::{body_suffix, capture_base, capture_bases, write_capture, Capture};
pub use error::ReplayError;
pub use transport::{CurlTransport, TransportOptions};

/// One request to replay.
#[derive(Debug, Clone, Copy)]
pub struct ReplayRequest<'a> {
    pub method: &'a str,
    pub url: &'a str,
    pub headers: &'a HeaderMap,
}

/// Final response of a replayed request (after any followed redirects).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedResponse {
    /// Status code and reason phrase, e.g. `"200 OK"`.
    pub status: String,
    /// Response headers in arrival order; repeated names are kept.
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl CapturedResponse {
    /// First `Content-Type` header, matched case-insensitively.
    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case("content-type"))
            .map(|(_, v)| v.as_str())
    }
}

/// Sends a request and returns the response, whatever its status.
pub trait Transport {
    fn send(&self, req: &ReplayRequest<'_>) -> Result<CapturedResponse, ReplayError>;
}

/// Captures written for one document.
#[derive(Debug, Clone, Default)]
pub struct ReplaySummary {
    pub captures: Vec<Capture>,
}

/// Replay every URL of `doc` with `method`, in file order. Captures for URL
/// `i` are written at `<base>-<i>-headers.txt` and `<base>-<i>-body.<suffix>`.
///
/// A document with URLs but no headers for `method` fails before any request
/// is sent. Transport failures are retried per `policy`; the first one that
/// persists aborts the run.
pub fn replay_document<T: Transport + ?Sized>(
    doc: &Document,
    method: &str,
    base: &Path,
    transport: &T,
    policy: &RetryPolicy,
) -> Result<ReplaySummary, ReplayError> {
    let mut summary = ReplaySummary::default();
    if doc.urls.is_empty() {
        return Ok(summary);
    }
    let headers = doc
        .headers_for(method)
        .ok_or_else(|| ReplayError::MissingMethod(method.to_string()))?;

    for (idx, url) in doc.urls.iter().enumerate() {
        let req = ReplayRequest {
            method,
            url,
            headers,
        };
        let resp = run_with_retry(policy, || transport.send(&req))?;
        let url_base = capture::with_suffix(base, &format!("-{}", idx));
        let cap = write_capture(&url_base, &req, &resp)?;
        tracing::info!(
            method,
            url = %url,
            status = %cap.status,
            body = %cap.body_path.display(),
            "captured"
        );
        summary.captures.push(cap);
    }

    Ok(summary)
}
