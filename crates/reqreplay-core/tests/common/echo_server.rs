//! Minimal HTTP/1.1 server for integration tests.
//!
//! Answers every request with `200 OK` and a body echoing the request line
//! and headers. `/redirect` answers `302` pointing at `/final`; `/page.html`
//! and `/feed.xml` set matching content types.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

/// Starts a server in a background thread. Returns the base URL
/// (e.g. "http://127.0.0.1:12345"). The server runs until the process exits.
pub fn start() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            thread::spawn(move || handle(stream));
        }
    });
    format!("http://127.0.0.1:{}", port)
}

fn handle(mut stream: std::net::TcpStream) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let head = request.split("\r\n\r\n").next().unwrap_or("");
    let request_line = head.lines().next().unwrap_or("");
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or("");
    let path = parts.next().unwrap_or("/");

    if path == "/redirect" {
        let _ = stream.write_all(
            b"HTTP/1.1 302 Found\r\nLocation: /final\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        );
        return;
    }

    let content_type = if path.ends_with(".html") {
        "text/html; charset=utf-8"
    } else if path.ends_with(".xml") {
        "application/xml"
    } else {
        "text/plain"
    };
    let body = if method.eq_ignore_ascii_case("HEAD") {
        String::new()
    } else {
        format!("{}\n", head.replace("\r\n", "\n"))
    };
    let response = format!(
        "HTTP/1.1 200 OK\r\nContent-Type: {}\r\nX-Echo-Method: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        content_type,
        method,
        body.len()
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.write_all(body.as_bytes());
}
