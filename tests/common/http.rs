//! Minimal HTTP stub server for exercising the remote repository wire
//! contract (HEAD existence probes, GET document fetches) without network
//! access.

#![allow(dead_code)]

use std::collections::HashMap;
use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;

/// A tiny single-purpose HTTP server bound to an ephemeral localhost port.
///
/// Routes map request paths to `(status, body)`; unrouted paths answer 404.
/// The accept loop runs on a detached thread for the life of the test
/// process.
pub struct StubServer {
    base_url: String,
}

impl StubServer {
    pub fn start(routes: HashMap<String, (u16, String)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind stub server");
        let addr = listener.local_addr().expect("Failed to read local addr");

        thread::spawn(move || {
            for stream in listener.incoming() {
                match stream {
                    Ok(stream) => handle(stream, &routes),
                    Err(_) => break,
                }
            }
        });

        Self {
            base_url: format!("http://{}", addr),
        }
    }

    /// Convenience constructor for a repository serving one module
    pub fn with_module(name: &str, module_json: &str, config_js: &str) -> Self {
        let mut routes = HashMap::new();
        routes.insert(
            format!("/{}/module.json", name),
            (200, module_json.to_string()),
        );
        routes.insert(format!("/{}/config.js", name), (200, config_js.to_string()));
        Self::start(routes)
    }

    pub fn url(&self) -> &str {
        &self.base_url
    }
}

fn handle(mut stream: TcpStream, routes: &HashMap<String, (u16, String)>) {
    let Ok(peer) = stream.try_clone() else { return };
    let mut reader = BufReader::new(peer);

    let mut request_line = String::new();
    if reader.read_line(&mut request_line).is_err() {
        return;
    }

    // Drain headers; the stub never needs them.
    loop {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) => break,
            Ok(_) if line == "\r\n" || line == "\n" => break,
            Ok(_) => {}
            Err(_) => return,
        }
    }

    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or("");
    let path = parts.next().unwrap_or("");

    let (status, body) = routes
        .get(path)
        .cloned()
        .unwrap_or((404, String::new()));
    let reason = match status {
        200 => "OK",
        404 => "Not Found",
        _ => "Error",
    };

    let mut response = format!(
        "HTTP/1.1 {} {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        status,
        reason,
        body.len()
    );
    if method != "HEAD" {
        response.push_str(&body);
    }
    let _ = stream.write_all(response.as_bytes());
}
