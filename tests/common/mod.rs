//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use hostname_relay::config::{validate_config, ServiceConfig, ServiceRole};
use hostname_relay::frontend::BackendClient;
use hostname_relay::{backend, frontend, HttpServer, Shutdown};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// A service running on an ephemeral port. Shuts down when dropped.
pub struct TestService {
    pub addr: SocketAddr,
    shutdown: Shutdown,
}

impl TestService {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for TestService {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

async fn spawn_service(role: ServiceRole, routes: Router) -> TestService {
    spawn_service_with_config(role, routes, &ServiceConfig::default()).await
}

async fn spawn_service_with_config(
    role: ServiceRole,
    routes: Router,
    config: &ServiceConfig,
) -> TestService {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let shutdown = Shutdown::new();
    let server = HttpServer::new(role, routes, config);
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    TestService { addr, shutdown }
}

/// Start the real backend service reporting `hostname`.
pub async fn start_backend(hostname: &str) -> TestService {
    spawn_service(ServiceRole::Backend, backend::router(Arc::from(hostname))).await
}

/// Start the real frontend service pointed at `backend_url`.
pub async fn start_frontend(hostname: &str, backend_url: &str, timeout: Duration) -> TestService {
    let client = BackendClient::new(backend_url.parse().unwrap(), timeout, false).unwrap();
    spawn_service(
        ServiceRole::Frontend,
        frontend::router(Arc::from(hostname), client),
    )
    .await
}

/// Start the frontend exactly as the binary would from a validated config.
pub async fn start_frontend_with_config(hostname: &str, config: &ServiceConfig) -> TestService {
    validate_config(config, ServiceRole::Frontend).unwrap();
    let mut upstream = config.upstream.clone();
    upstream.use_system_proxy = false;
    let client = BackendClient::from_config(&upstream).unwrap();
    spawn_service_with_config(
        ServiceRole::Frontend,
        frontend::router(Arc::from(hostname), client),
        config,
    )
    .await
}

/// An address nothing is listening on.
pub async fn closed_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

/// Start a raw-TCP backend whose response is computed from the request head.
///
/// `f` receives the request line and headers and returns status and body.
pub async fn start_programmable_backend<F, Fut>(f: F) -> SocketAddr
where
    F: Fn(String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let f = Arc::new(f);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let f = f.clone();
                    tokio::spawn(async move {
                        let head = read_request_head(&mut socket).await;
                        let (status, body) = f(head).await;
                        let status_text = match status {
                            200 => "200 OK",
                            404 => "404 Not Found",
                            500 => "500 Internal Server Error",
                            503 => "503 Service Unavailable",
                            _ => "200 OK",
                        };

                        let response = format!(
                            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_text,
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}

/// Start a raw-TCP backend that always answers 200 with `body`.
pub async fn start_mock_backend(body: &'static str) -> SocketAddr {
    start_programmable_backend(move |_| async move { (200, body.to_string()) }).await
}

async fn read_request_head(socket: &mut tokio::net::TcpStream) -> String {
    let mut head = Vec::new();
    let mut buf = [0u8; 1024];
    while !head.windows(4).any(|w| w == b"\r\n\r\n") {
        match socket.read(&mut buf).await {
            Ok(0) | Err(_) => break,
            Ok(n) => head.extend_from_slice(&buf[..n]),
        }
    }
    String::from_utf8_lossy(&head).into_owned()
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
