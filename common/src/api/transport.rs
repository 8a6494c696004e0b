use async_trait::async_trait;

use super::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A request as issued by [`super::ApiClient`]. POST bodies are JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn get(url: String) -> Self {
        Self {
            method: Method::Get,
            url,
            body: None,
        }
    }

    pub fn post_json(url: String, body: String) -> Self {
        Self {
            method: Method::Post,
            url,
            body: Some(body),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Moves one request to the server and back.
///
/// Any reply that arrives is `Ok`, whatever its status; `Err` is reserved for
/// requests that never produced a response. Futures are not `Send` because
/// the browser build runs them on the single JS thread.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: HttpRequest) -> Result<HttpReply, ApiError>;
}
