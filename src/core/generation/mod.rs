//! Generation proxy
//!
//! Accepts a prompt plus an optional reference image, decides between the
//! upstream `images/generations` and `images/edits` endpoints, and reduces
//! the upstream answer to `{url, base64}`.

pub mod client;
pub mod data_url;
pub mod proxy;
pub mod request;
pub mod types;

pub use client::UpstreamClient;
pub use data_url::DataUrl;
pub use proxy::{GenerationProxy, ImageGenerator};
pub use request::{EditPayload, GenerationPayload, UpstreamRequest};
pub use types::{
    GenerateRequest, GenerateResponse, NO_IMAGE_DATA, ResponseFormat, normalize_upstream_body,
};
