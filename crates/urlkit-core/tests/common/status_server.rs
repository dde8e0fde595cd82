//! Minimal HTTP/1.1 server with canned routes for integration tests.
//!
//! Every route answers HEAD and GET. `{base}` inside a redirect location is
//! replaced by the server's own base URL.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub enum Route {
    /// Empty response with this status.
    Status(u16),
    /// Response with a `Location` header.
    Redirect { status: u16, location: String },
    /// 200 with a body.
    Body { content_type: &'static str, body: String },
    /// Sleep before answering 200 (for timeout tests).
    Stall(Duration),
}

/// Starts a server in a background thread. Returns the base URL without a
/// trailing slash (e.g. "http://127.0.0.1:12345"). Unknown paths get 404.
pub fn start(routes: Vec<(&str, Route)>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let base = format!("http://127.0.0.1:{}", port);
    let routes: Arc<HashMap<String, Route>> = Arc::new(
        routes
            .into_iter()
            .map(|(path, route)| (path.to_string(), route))
            .collect(),
    );
    let server_base = base.clone();
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let routes = Arc::clone(&routes);
            let base = server_base.clone();
            thread::spawn(move || handle(stream, &routes, &base));
        }
    });
    base
}

/// A base URL on which nothing is listening.
pub fn unreachable_base() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

fn handle(mut stream: std::net::TcpStream, routes: &HashMap<String, Route>, base: &str) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
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
    let mut parts = request.lines().next().unwrap_or("").split_whitespace();
    let method = parts.next().unwrap_or("");
    let path = parts.next().unwrap_or("/");
    let is_head = method.eq_ignore_ascii_case("HEAD");

    let (status, extra, body) = match routes.get(path) {
        Some(Route::Status(code)) => (*code, String::new(), String::new()),
        Some(Route::Redirect { status, location }) => (
            *status,
            format!("Location: {}\r\n", location.replace("{base}", base)),
            String::new(),
        ),
        Some(Route::Body { content_type, body }) => (
            200,
            format!("Content-Type: {}\r\n", content_type),
            body.clone(),
        ),
        Some(Route::Stall(d)) => {
            thread::sleep(*d);
            (200, String::new(), String::new())
        }
        None => (404, String::new(), String::new()),
    };

    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Length: {}\r\nConnection: close\r\n{}\r\n",
        status,
        reason(status),
        body.len(),
        extra
    );
    let _ = stream.write_all(response.as_bytes());
    if !is_head {
        let _ = stream.write_all(body.as_bytes());
    }
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        301 => "Moved Permanently",
        302 => "Found",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}
