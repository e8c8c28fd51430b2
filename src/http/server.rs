//! HTTP server startup logic.

use std::net::{SocketAddr, TcpListener};
use std::time::Duration;

use axum::Router;
use axum_server::Handle;

use crate::config::{ConfigError, HttpServerConfig};

use super::shutdown;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid listen address: {0}")]
    Address(#[from] ConfigError),

    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    #[error("Server error: {0}")]
    Server(String),
}

/// Bind the configured address.
///
/// Binding happens before serving so an occupied port is reported as a
/// startup error, and so a port of 0 resolves to the real port for logging.
pub fn bind(config: &HttpServerConfig) -> Result<TcpListener, ServerError> {
    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr)?;
    listener.set_nonblocking(true)?;
    Ok(listener)
}

/// Serve `app` on an already bound listener until SIGTERM/SIGINT.
///
/// This function blocks until the server shuts down.
pub async fn start_server(
    app: Router,
    listener: TcpListener,
    config: &HttpServerConfig,
) -> Result<(), ServerError> {
    let handle = Handle::new();
    shutdown::setup_shutdown_handler(
        handle.clone(),
        Duration::from_secs(config.shutdown_timeout_seconds),
    );

    serve(app, listener, handle).await
}

/// Serve `app` on an already bound listener until `handle` shuts it down.
pub async fn serve(app: Router, listener: TcpListener, handle: Handle) -> Result<(), ServerError> {
    let addr: SocketAddr = listener.local_addr()?;
    tracing::info!(%addr, "Starting HTTP server");

    axum_server::from_tcp(listener)
        .handle(handle)
        .serve(app.into_make_service())
        .await
        .map_err(|e| ServerError::Server(e.to_string()))?;

    tracing::info!("HTTP server stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loopback(port: u16) -> HttpServerConfig {
        HttpServerConfig {
            host: "127.0.0.1".to_string(),
            port,
            ..HttpServerConfig::default()
        }
    }

    #[test]
    fn bind_resolves_ephemeral_port() {
        let listener = bind(&loopback(0)).unwrap();
        assert_ne!(listener.local_addr().unwrap().port(), 0);
    }

    #[test]
    fn occupied_port_is_a_bind_error() {
        let first = bind(&loopback(0)).unwrap();
        let port = first.local_addr().unwrap().port();

        let err = bind(&loopback(port)).unwrap_err();
        assert!(matches!(err, ServerError::Bind(_)));
    }

    #[test]
    fn hostname_is_an_address_error() {
        let config = HttpServerConfig {
            host: "not-an-ip".to_string(),
            ..HttpServerConfig::default()
        };
        assert!(matches!(bind(&config).unwrap_err(), ServerError::Address(_)));
    }
}
