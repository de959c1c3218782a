//! Turn raw header lines collected from libcurl into a status and header list.

/// Status text and headers of the last response in `lines`.
///
/// libcurl reports every response it sees, so with redirects followed the
/// lines hold several blocks; each `HTTP/` status line starts a new block and
/// only the final one is kept. The status is the line without its protocol
/// token, e.g. `"200 OK"`.
pub(crate) fn parse_response_head(lines: &[String]) -> (String, Vec<(String, String)>) {
    let mut status = String::new();
    let mut headers = Vec::new();

    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with("HTTP/") {
            status = line
                .split_once(' ')
                .map(|(_, rest)| rest.trim().to_string())
                .unwrap_or_default();
            headers.clear();
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            headers.push((name.trim().to_string(), value.trim().to_string()));
        }
    }

    (status, headers)
}
