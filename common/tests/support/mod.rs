use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;
use common::api::{ApiClient, ApiError, HttpReply, HttpRequest, Transport};
use common::config::ApiConfig;

pub const BASE_URL: &str = "http://api.test";

/// Transport that records every request and answers from a scripted queue.
/// When the queue runs dry it answers `200 []`.
#[derive(Clone, Default)]
pub struct MockTransport {
    requests: Rc<RefCell<Vec<HttpRequest>>>,
    replies: Rc<RefCell<VecDeque<Result<HttpReply, ApiError>>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, status: u16, body: &str) -> Self {
        self.replies.borrow_mut().push_back(Ok(HttpReply {
            status,
            body: body.to_string(),
        }));
        self
    }

    pub fn fail(self, err: ApiError) -> Self {
        self.replies.borrow_mut().push_back(Err(err));
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpReply, ApiError> {
        self.requests.borrow_mut().push(request);
        self.replies.borrow_mut().pop_front().unwrap_or(Ok(HttpReply {
            status: 200,
            body: "[]".to_string(),
        }))
    }
}

pub fn client(transport: MockTransport) -> ApiClient<MockTransport> {
    ApiClient::new(ApiConfig::new(BASE_URL), transport)
}

pub fn movies_json(count: usize) -> String {
    let rows: Vec<String> = (1..=count)
        .map(|i| {
            format!(
                r#"{{"movieId": {}, "title": "Movie {}", "rating": 4.0, "genre": "Drama"}}"#,
                100 - i,
                i
            )
        })
        .collect();
    format!("[{}]", rows.join(","))
}
