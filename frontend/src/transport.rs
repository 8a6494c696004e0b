use async_trait::async_trait;
use common::api::{ApiClient, ApiError, HttpReply, HttpRequest, Method, Transport};
use common::config::AppConfig;
use gloo_net::http::Request;

/// `fetch`-backed transport used in the browser.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GlooTransport;

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpReply, ApiError> {
        let response = match request.method {
            Method::Get => Request::get(&request.url).send().await,
            Method::Post => {
                Request::post(&request.url)
                    .header("Content-Type", "application/json")
                    .body(request.body.unwrap_or_default())
                    .map_err(|e| ApiError::Encode(e.to_string()))?
                    .send()
                    .await
            }
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(HttpReply { status, body })
    }
}

pub fn api_client(config: &AppConfig) -> ApiClient<GlooTransport> {
    ApiClient::new(config.api.clone(), GlooTransport)
}
