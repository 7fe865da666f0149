//! Startup helpers for the HttpServer

use crate::server::server::HttpServer;
use crate::utils::error::GatewayError;
use std::io::ErrorKind;

impl HttpServer {
    /// Turn a bind failure into an actionable message
    pub(crate) fn format_bind_error(
        error: std::io::Error,
        bind_addr: &str,
        port: u16,
    ) -> GatewayError {
        match error.kind() {
            ErrorKind::AddrInUse => GatewayError::internal(format!(
                "Port {} is already in use. Stop the other process or set GATEWAY_PORT={}",
                port,
                port.saturating_add(1)
            )),
            ErrorKind::PermissionDenied => GatewayError::internal(format!(
                "Permission denied for port {}. Use a port >= 1024, e.g. GATEWAY_PORT=3000",
                port
            )),
            _ => GatewayError::internal(format!("Failed to bind to {}: {}", bind_addr, error)),
        }
    }
}
