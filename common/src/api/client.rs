use std::collections::HashSet;

use log::{debug, warn};
use serde::Serialize;

use crate::config::ApiConfig;
use crate::model::movie::{Movie, MovieRow};
use crate::model::user::UserId;
use crate::requests::{RatingSubmission, RecommendRequest};

use super::{ApiError, ApiResult, HttpReply, HttpRequest, Transport};

#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient<T> {
    config: ApiConfig,
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(config: ApiConfig, transport: T) -> Self {
        Self { config, transport }
    }

    /// `GET /api/search?query=`: movies whose title or genre matches.
    pub async fn search(&self, query: &str) -> ApiResult<Vec<Movie>> {
        let url = self.config.url(&format!(
            "/api/search?query={}",
            urlencoding::encode(query)
        ));
        self.get_movies(url).await
    }

    /// `GET /api/recommended?userId=`: the stored recommendation list of a user.
    pub async fn recommended(&self, user_id: UserId) -> ApiResult<Vec<Movie>> {
        let url = self
            .config
            .url(&format!("/api/recommended?userId={}", user_id));
        self.get_movies(url).await
    }

    /// `POST /api/recommend`: asks the server to compute recommendations.
    pub async fn create_recommendations(&self, user_id: UserId) -> ApiResult<()> {
        self.post_json("/api/recommend", &RecommendRequest { user_id })
            .await
    }

    /// `POST /api/ratings`: stores one rating. Not deduplicated.
    pub async fn submit_rating(&self, submission: &RatingSubmission) -> ApiResult<()> {
        self.post_json("/api/ratings", submission).await
    }

    async fn get_movies(&self, url: String) -> ApiResult<Vec<Movie>> {
        debug!("GET {}", url);
        let reply = self.transport.send(HttpRequest::get(url)).await?;
        let reply = ensure_success(reply)?;
        decode_movies(&reply.body)
    }

    async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> ApiResult<()> {
        let url = self.config.url(path);
        let body = serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        debug!("POST {} {}", url, body);
        let reply = self.transport.send(HttpRequest::post_json(url, body)).await?;
        ensure_success(reply).map(|_| ())
    }
}

fn ensure_success(reply: HttpReply) -> ApiResult<HttpReply> {
    if reply.is_success() {
        Ok(reply)
    } else {
        Err(ApiError::Status(reply.status))
    }
}

/// Decodes a JSON array of movie rows, keeping server order.
///
/// Rows without an identifier are dropped, and so are repeats of an id already
/// seen: the server may list a movie once per stored recommendation, and views
/// key their cards by movie id.
fn decode_movies(body: &str) -> ApiResult<Vec<Movie>> {
    let rows: Vec<MovieRow> =
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    let total = rows.len();
    let mut seen = HashSet::new();
    let movies: Vec<Movie> = rows
        .into_iter()
        .filter_map(MovieRow::into_movie)
        .filter(|movie| seen.insert(movie.movie_id))
        .collect();
    if movies.len() != total {
        warn!(
            "dropped {} movie rows without an identifier or with a repeated one",
            total - movies.len()
        );
    }
    Ok(movies)
}
