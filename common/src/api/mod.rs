//! Client for the recommendation service's REST API.
//!
//! `ApiClient` knows the four endpoints and their payloads; moving bytes is
//! delegated to a [`Transport`], which the browser build implements with
//! `gloo-net` and the tests with a recording mock.

mod client;
mod transport;

pub use client::ApiClient;
pub use transport::{HttpReply, HttpRequest, Method, Transport};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("network error: {0}")]
    Network(String),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("could not encode request: {0}")]
    Encode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;
