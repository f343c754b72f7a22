//! Minimal HTTP/1.1 server for integration tests.
//!
//! Serves a fixed set of routes (post pages and media bodies) and records
//! every request head so tests can assert on sent headers. An optional
//! per-route delay between headers and body lets tests abort a transfer
//! while it is in flight.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Route {
    pub path: &'static str,
    pub content_type: &'static str,
    pub body: Vec<u8>,
    /// Pause between writing headers and body (None = no pause).
    pub body_delay: Option<Duration>,
}

impl Route {
    pub fn html(path: &'static str, body: String) -> Self {
        Self {
            path,
            content_type: "text/html; charset=utf-8",
            body: body.into_bytes(),
            body_delay: None,
        }
    }

    pub fn bytes(path: &'static str, body: Vec<u8>) -> Self {
        Self {
            path,
            content_type: "application/octet-stream",
            body,
            body_delay: None,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.body_delay = Some(delay);
        self
    }
}

/// Starts a server in a background thread. Returns the base URL (no trailing
/// slash) and the log of raw request heads. The server runs until the
/// process exits.
pub fn start(routes: Vec<Route>) -> (String, Arc<Mutex<Vec<String>>>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let routes = Arc::new(routes);
    let requests = Arc::new(Mutex::new(Vec::new()));
    let requests_srv = Arc::clone(&requests);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let routes = Arc::clone(&routes);
            let requests = Arc::clone(&requests_srv);
            thread::spawn(move || handle(stream, &routes, &requests));
        }
    });
    (format!("http://127.0.0.1:{}", port), requests)
}

fn handle(
    mut stream: std::net::TcpStream,
    routes: &[Route],
    requests: &Arc<Mutex<Vec<String>>>,
) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s.to_string(),
        Err(_) => return,
    };
    requests.lock().unwrap().push(request.clone());

    let path = request_path(&request);
    let Some(route) = routes.iter().find(|r| Some(r.path) == path.as_deref()) else {
        let _ = stream.write_all(b"HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\n\r\n");
        return;
    };

    let headers = format!(
        "HTTP/1.1 200 OK\r\nContent-Type: {}\r\nContent-Length: {}\r\n\r\n",
        route.content_type,
        route.body.len()
    );
    if stream.write_all(headers.as_bytes()).is_err() {
        return;
    }
    if let Some(delay) = route.body_delay {
        let _ = stream.flush();
        thread::sleep(delay);
    }
    let _ = stream.write_all(&route.body);
}

fn request_path(request: &str) -> Option<String> {
    let first_line = request.lines().next()?;
    let mut parts = first_line.split_whitespace();
    let _method = parts.next()?;
    parts.next().map(str::to_string)
}
