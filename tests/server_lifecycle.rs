//! End-to-end tests over a real socket.
//!
//! Each test binds an ephemeral loopback port, serves the router with
//! `axum-server`, talks raw HTTP/1.1 to it and then drains it through the
//! same shutdown path the binary uses for SIGTERM.

use std::net::SocketAddr;
use std::time::Duration;

use axum_server::Handle;
use dashboard::config::{HttpServerConfig, HEALTH_MESSAGE};
use dashboard::create_router;
use dashboard::http::{bind, serve, shutdown_on, ServerError};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

struct TestServer {
    addr: SocketAddr,
    server: JoinHandle<Result<(), ServerError>>,
    stop: oneshot::Sender<()>,
}

impl TestServer {
    async fn start(drain_timeout: Duration) -> Self {
        let config = HttpServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            ..HttpServerConfig::default()
        };
        let listener = bind(&config).unwrap();

        let handle = Handle::new();
        let (stop, stopped) = oneshot::channel::<()>();
        tokio::spawn(shutdown_on(handle.clone(), drain_timeout, async move {
            let _ = stopped.await;
        }));

        let server = tokio::spawn(serve(create_router(), listener, handle.clone()));
        let addr = handle.listening().await.expect("server failed to listen");

        Self { addr, server, stop }
    }

    /// Signal shutdown and wait for the serve future, bounded by `limit`.
    async fn stop(self, limit: Duration) -> Result<(), ServerError> {
        self.stop.send(()).unwrap();
        tokio::time::timeout(limit, self.server)
            .await
            .expect("server did not drain in time")
            .unwrap()
    }
}

async fn raw_request(addr: SocketAddr, method: &str, target: &str) -> String {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    let request = format!(
        "{method} {target} HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n\r\n"
    );
    stream.write_all(request.as_bytes()).await.unwrap();

    let mut response = Vec::new();
    stream.read_to_end(&mut response).await.unwrap();
    String::from_utf8(response).unwrap()
}

#[tokio::test]
async fn serves_health_over_tcp_and_drains() {
    let server = TestServer::start(Duration::from_secs(5)).await;

    let response = raw_request(server.addr, "GET", "/health?foo=bar").await;
    assert!(response.starts_with("HTTP/1.1 200 OK\r\n"), "got {response}");
    let lower = response.to_ascii_lowercase();
    assert!(lower.contains("content-type: text/plain"));
    assert!(lower.contains("cache-control: no-store"));
    assert!(lower.contains("x-request-id: "));
    assert!(response.ends_with(HEALTH_MESSAGE));

    server.stop(Duration::from_secs(10)).await.unwrap();
}

#[tokio::test]
async fn unknown_routes_and_methods_over_tcp() {
    let server = TestServer::start(Duration::from_secs(5)).await;

    let response = raw_request(server.addr, "POST", "/health").await;
    assert!(response.starts_with("HTTP/1.1 405"), "got {response}");

    let response = raw_request(server.addr, "GET", "/nope").await;
    assert!(response.starts_with("HTTP/1.1 404"), "got {response}");
    assert!(response.ends_with("Not found: /nope"));

    server.stop(Duration::from_secs(10)).await.unwrap();
}

#[tokio::test]
async fn open_connection_does_not_block_shutdown_past_timeout() {
    let server = TestServer::start(Duration::from_millis(500)).await;

    // Held open and never used, so the drain has to end on its own
    let _idle = TcpStream::connect(server.addr).await.unwrap();
    tokio::time::sleep(Duration::from_millis(50)).await;

    server.stop(Duration::from_secs(5)).await.unwrap();
}
