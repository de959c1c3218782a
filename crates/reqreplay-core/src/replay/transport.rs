//! libcurl transport.

use std::str;
use std::time::Duration;

use super::parse::parse_response_head;
use super::{CapturedResponse, ReplayError, ReplayRequest, Transport};

/// Per-request limits applied by [`CurlTransport`].
#[derive(Debug, Clone, Copy)]
pub struct TransportOptions {
    pub connect_timeout: Duration,
    pub timeout: Duration,
    pub follow_redirects: bool,
    pub max_redirections: u32,
}

impl Default for TransportOptions {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(15),
            timeout: Duration::from_secs(60),
            follow_redirects: true,
            max_redirections: 10,
        }
    }
}

/// Blocking transport on a fresh `curl::easy::Easy` handle per request.
/// Call from `spawn_blocking` if used from async code.
#[derive(Debug, Clone, Default)]
pub struct CurlTransport {
    options: TransportOptions,
}

impl CurlTransport {
    pub fn new(options: TransportOptions) -> Self {
        Self { options }
    }
}

impl Transport for CurlTransport {
    fn send(&self, req: &ReplayRequest<'_>) -> Result<CapturedResponse, ReplayError> {
        let mut head: Vec<String> = Vec::new();
        let mut body: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(req.url)?;
        match req.method {
            "GET" => easy.get(true)?,
            "HEAD" => easy.nobody(true)?,
            other => easy.custom_request(other)?,
        }
        easy.follow_location(self.options.follow_redirects)?;
        easy.max_redirections(self.options.max_redirections)?;
        easy.connect_timeout(self.options.connect_timeout)?;
        easy.timeout(self.options.timeout)?;

        let mut list = curl::easy::List::new();
        for (k, v) in req.headers {
            // "Name:" would make libcurl drop the header; "Name;" sends it empty.
            if v.is_empty() {
                list.append(&format!("{};", k))?;
            } else {
                list.append(&format!("{}: {}", k, v))?;
            }
        }
        easy.http_headers(list)?;

        {
            let mut transfer = easy.transfer();
            transfer.header_function(|data| {
                if let Ok(s) = str::from_utf8(data) {
                    head.push(s.trim_end().to_string());
                }
                true
            })?;
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let (status, headers) = parse_response_head(&head);
        tracing::debug!(method = req.method, url = req.url, %status, bytes = body.len(), "response");
        Ok(CapturedResponse {
            status,
            headers,
            body,
        })
    }
}
