//! Error handling for the gateway
//!
//! This module defines the error type shared by the generation proxy, the
//! configuration layer and the HTTP server.

mod response;
mod types;

pub use response::ErrorResponse;
pub use types::{GatewayError, Result};
