//! HttpUrlResolver tests against a local HTTP stub
//!
//! The stub speaks just enough HTTP/1.1 for ureq: one request per
//! connection, `Connection: close` on every response.

use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use bookmarks_service::config::FetchConfig;
use bookmarks_service::services::{FetchError, HttpUrlResolver, UrlResolver};

struct StubServer {
    base: String,
    user_agents: Arc<Mutex<Vec<String>>>,
}

impl StubServer {
    fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub server");
        let base = format!("http://{}", listener.local_addr().unwrap());
        let user_agents = Arc::new(Mutex::new(Vec::new()));

        let seen = user_agents.clone();
        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                let seen = seen.clone();
                thread::spawn(move || handle(stream, seen));
            }
        });

        Self { base, user_agents }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }
}

fn handle(mut stream: TcpStream, seen: Arc<Mutex<Vec<String>>>) {
    let mut reader = BufReader::new(stream.try_clone().unwrap());
    let mut request_line = String::new();
    if reader.read_line(&mut request_line).is_err() {
        return;
    }
    let path = request_line
        .split_whitespace()
        .nth(1)
        .unwrap_or("/")
        .to_string();

    loop {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) | Err(_) => return,
            Ok(_) => {}
        }
        if line == "\r\n" {
            break;
        }
        if let Some((name, value)) = line.split_once(':')
            && name.eq_ignore_ascii_case("user-agent")
        {
            seen.lock().unwrap().push(value.trim().to_string());
        }
    }

    let (status, location) = match path.as_str() {
        "/ok" => ("200 OK", None),
        "/redirect" => ("302 Found", Some("/ok")),
        "/moved" => ("301 Moved Permanently", Some("/redirect")),
        "/loop" => ("302 Found", Some("/loop")),
        "/missing" => ("404 Not Found", None),
        "/broken" => ("500 Internal Server Error", None),
        "/slow" => {
            thread::sleep(Duration::from_secs(3));
            ("200 OK", None)
        }
        _ => ("404 Not Found", None),
    };

    let mut response = format!(
        "HTTP/1.1 {}\r\nContent-Length: 2\r\nConnection: close\r\n",
        status
    );
    if let Some(location) = location {
        response.push_str(&format!("Location: {}\r\n", location));
    }
    response.push_str("\r\nok");
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
}

fn resolver(timeout_secs: u64) -> HttpUrlResolver {
    HttpUrlResolver::new(&FetchConfig {
        timeout_secs,
        ..Default::default()
    })
}

#[tokio::test]
async fn test_resolve_ok() {
    let server = StubServer::start();
    let resolver = resolver(5);

    let url = server.url("/ok");
    assert_eq!(resolver.resolve(&url, true).await.unwrap(), url);
    assert_eq!(resolver.resolve(&url, false).await.unwrap(), url);
}

#[tokio::test]
async fn test_resolve_follows_redirect_chain() {
    let server = StubServer::start();
    let resolver = resolver(5);

    let resolved = resolver.resolve(&server.url("/moved"), true).await.unwrap();
    assert_eq!(resolved, server.url("/ok"));
}

#[tokio::test]
async fn test_resolve_without_following_keeps_submitted_url() {
    let server = StubServer::start();
    let resolver = resolver(5);

    let url = server.url("/redirect");
    assert_eq!(resolver.resolve(&url, false).await.unwrap(), url);
}

#[tokio::test]
async fn test_resolve_error_status() {
    let server = StubServer::start();
    let resolver = resolver(5);

    assert_eq!(
        resolver.resolve(&server.url("/missing"), true).await,
        Err(FetchError::HttpStatus(404))
    );
    assert_eq!(
        resolver.resolve(&server.url("/broken"), false).await,
        Err(FetchError::HttpStatus(500))
    );
}

#[tokio::test]
async fn test_resolve_redirect_loop() {
    let server = StubServer::start();
    let resolver = HttpUrlResolver::new(&FetchConfig {
        max_redirects: 3,
        ..Default::default()
    });

    assert_eq!(
        resolver.resolve(&server.url("/loop"), true).await,
        Err(FetchError::TooManyRedirects)
    );
}

#[tokio::test]
async fn test_resolve_timeout() {
    let server = StubServer::start();
    let resolver = resolver(1);

    assert_eq!(
        resolver.resolve(&server.url("/slow"), true).await,
        Err(FetchError::Timeout)
    );
}

#[tokio::test]
async fn test_resolve_connection_refused() {
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let resolver = resolver(2);

    let err = resolver
        .resolve(&format!("http://127.0.0.1:{}/", port), true)
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::Unreachable(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_resolve_sends_user_agent() {
    let server = StubServer::start();
    let resolver = HttpUrlResolver::new(&FetchConfig {
        user_agent_name: "bookmarks_test".to_string(),
        ..Default::default()
    });

    resolver.resolve(&server.url("/ok"), false).await.unwrap();

    let seen = server.user_agents.lock().unwrap().clone();
    assert_eq!(
        seen,
        vec![format!("bookmarks_test/{}", env!("CARGO_PKG_VERSION"))]
    );
}
