//! Capture files: `<base>-headers.txt` and `<base>-body.<suffix>`.

use std::collections::HashSet;
use std::ffi::OsString;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use super::{CapturedResponse, ReplayError, ReplayRequest};

/// Paths written for one replayed URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capture {
    pub url: String,
    pub status: String,
    pub headers_path: PathBuf,
    pub body_path: PathBuf,
}

/// Body file suffix from a `Content-Type` value; parameters are ignored.
pub fn body_suffix(content_type: Option<&str>) -> &'static str {
    let media_type = content_type
        .and_then(|ct| ct.split(';').next())
        .map(|mt| mt.trim().to_ascii_lowercase())
        .unwrap_or_default();
    if media_type.ends_with("/xml") {
        "xml"
    } else if media_type.ends_with("/html") {
        "html"
    } else {
        "txt"
    }
}

/// Base path for captures of `outline`: next to it, or inside `output_dir`.
pub fn capture_base(outline: &Path, output_dir: Option<&Path>) -> PathBuf {
    match (output_dir, outline.file_name()) {
        (Some(dir), Some(name)) => dir.join(name),
        _ => outline.to_path_buf(),
    }
}

/// Capture bases for several outlines, in order. An outline whose base is
/// already taken (same file name under `output_dir`, or the same file given
/// twice) gets `.<argument index>` appended so no captures are overwritten.
pub fn capture_bases(outlines: &[PathBuf], output_dir: Option<&Path>) -> Vec<PathBuf> {
    let mut taken = HashSet::new();
    outlines
        .iter()
        .enumerate()
        .map(|(idx, outline)| {
            let base = capture_base(outline, output_dir);
            let mut candidate = base.clone();
            let mut n = idx;
            while !taken.insert(candidate.clone()) {
                candidate = with_suffix(&base, &format!(".{}", n));
                n += 1;
            }
            if candidate != base {
                tracing::warn!(
                    outline = %outline.display(),
                    base = %candidate.display(),
                    "capture name already used, writing under a distinct base"
                );
            }
            candidate
        })
        .collect()
}

/// `base` with `suffix` appended to its last component.
pub(crate) fn with_suffix(base: &Path, suffix: &str) -> PathBuf {
    let mut name: OsString = base.as_os_str().to_owned();
    name.push(suffix);
    PathBuf::from(name)
}

/// Header dump: request line, `=> status`, then one `Name: value` per header.
fn render_headers(req: &ReplayRequest<'_>, resp: &CapturedResponse) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} {}", req.method, req.url);
    let _ = writeln!(out, "=> {}", resp.status);
    for (k, v) in &resp.headers {
        let _ = writeln!(out, "{}: {}", k, v);
    }
    out
}

fn write_file(path: PathBuf, data: &[u8]) -> Result<PathBuf, ReplayError> {
    fs::write(&path, data).map_err(|source| ReplayError::Output {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

/// Write both capture files for one response.
pub fn write_capture(
    base: &Path,
    req: &ReplayRequest<'_>,
    resp: &CapturedResponse,
) -> Result<Capture, ReplayError> {
    let headers_path = write_file(
        with_suffix(base, "-headers.txt"),
        render_headers(req, resp).as_bytes(),
    )?;
    let suffix = body_suffix(resp.content_type());
    let body_path = write_file(with_suffix(base, &format!("-body.{}", suffix)), &resp.body)?;

    Ok(Capture {
        url: req.url.to_string(),
        status: resp.status.clone(),
        headers_path,
        body_path,
    })
}
