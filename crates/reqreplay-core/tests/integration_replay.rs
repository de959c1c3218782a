//! Integration test: parse an outline file and replay it against a local server.

mod common;

use reqreplay_core::outline;
use reqreplay_core::replay::{self, CurlTransport, ReplayError, TransportOptions};
use reqreplay_core::retry::RetryPolicy;
use std::fs;
use tempfile::tempdir;

fn write_outline(dir: &std::path::Path, base_url: &str) -> std::path::PathBuf {
    let text = format!(
        "-*- mode: outline -*-\n\
         * Headers\n\
         ** GET\n\
         X-Replay: yes\n\
         Accept: text/html\n\
         ** POST\n\
         X-Replay: post\n\
         \n\
         * URLs\n\
         {base}/page.html?id=1\n\
         {base}/feed.xml\n\
         {base}/redirect\n",
        base = base_url
    );
    let path = dir.join("site.txt");
    fs::write(&path, text).unwrap();
    path
}

#[test]
fn get_replay_writes_captures_for_every_url() {
    let base_url = common::echo_server::start();
    let dir = tempdir().unwrap();
    let outline_path = write_outline(dir.path(), &base_url);

    let doc = outline::parse_file(&outline_path).unwrap();
    assert_eq!(doc.urls.len(), 3);

    let transport = CurlTransport::new(TransportOptions::default());
    let summary =
        replay::replay_document(&doc, "GET", &outline_path, &transport, &RetryPolicy::none())
            .unwrap();
    assert_eq!(summary.captures.len(), 3);

    let headers_0 = fs::read_to_string(dir.path().join("site.txt-0-headers.txt")).unwrap();
    let mut lines = headers_0.lines();
    assert_eq!(lines.next(), Some(format!("GET {}/page.html?id=1", base_url).as_str()));
    assert_eq!(lines.next(), Some("=> 200 OK"));
    assert!(headers_0.contains("X-Echo-Method: GET"));

    let body_0 = fs::read_to_string(dir.path().join("site.txt-0-body.html")).unwrap();
    assert!(body_0.starts_with("GET /page.html?id=1 HTTP/1.1"));
    assert!(body_0.contains("X-Replay: yes"));
    assert!(body_0.contains("Accept: text/html"));

    assert!(dir.path().join("site.txt-1-body.xml").exists());

    // Redirect is followed; only the final response is recorded.
    let headers_2 = fs::read_to_string(dir.path().join("site.txt-2-headers.txt")).unwrap();
    assert!(headers_2.contains("=> 200 OK"));
    assert!(!headers_2.contains("Location"));
    let body_2 = fs::read_to_string(dir.path().join("site.txt-2-body.txt")).unwrap();
    assert!(body_2.starts_with("GET /final HTTP/1.1"));
}

#[test]
fn post_replay_uses_post_headers() {
    let base_url = common::echo_server::start();
    let dir = tempdir().unwrap();
    let outline_path = write_outline(dir.path(), &base_url);
    let doc = outline::parse_file(&outline_path).unwrap();

    let opts = TransportOptions {
        follow_redirects: false,
        ..TransportOptions::default()
    };
    let transport = CurlTransport::new(opts);
    replay::replay_document(&doc, "POST", &outline_path, &transport, &RetryPolicy::none())
        .unwrap();

    let body_0 = fs::read_to_string(dir.path().join("site.txt-0-body.html")).unwrap();
    assert!(body_0.starts_with("POST /page.html?id=1 HTTP/1.1"));
    assert!(body_0.contains("X-Replay: post"));
    assert!(!body_0.contains("Accept: text/html"));

    // Without redirect following the 302 itself is the capture.
    let headers_2 = fs::read_to_string(dir.path().join("site.txt-2-headers.txt")).unwrap();
    assert!(headers_2.contains("=> 302 Found"));
    assert!(headers_2.contains("Location: /final"));
}

#[test]
fn unknown_method_is_rejected() {
    let base_url = common::echo_server::start();
    let dir = tempdir().unwrap();
    let outline_path = write_outline(dir.path(), &base_url);
    let doc = outline::parse_file(&outline_path).unwrap();

    let transport = CurlTransport::default();
    let err =
        replay::replay_document(&doc, "PATCH", &outline_path, &transport, &RetryPolicy::none())
            .unwrap_err();
    assert!(matches!(err, ReplayError::MissingMethod(_)));
    assert!(!dir.path().join("site.txt-0-headers.txt").exists());
}

#[test]
fn connection_refused_is_transport_error() {
    // Bind then drop to get a port nothing listens on.
    let port = {
        let l = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        l.local_addr().unwrap().port()
    };
    let doc = outline::parse_str(&format!(
        "* Headers\nA: 1\n* URLs\nhttp://127.0.0.1:{}/\n",
        port
    ))
    .unwrap();
    let dir = tempdir().unwrap();
    let err = replay::replay_document(
        &doc,
        "GET",
        &dir.path().join("x"),
        &CurlTransport::default(),
        &RetryPolicy::none(),
    )
    .unwrap_err();
    assert!(matches!(err, ReplayError::Curl(_)));
}
