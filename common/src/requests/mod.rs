//! JSON bodies posted to the recommendation service.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::model::movie::MovieId;
use crate::model::rating::Rating;
use crate::model::user::UserId;

/// Body of `POST /api/recommend`: asks the server to (re)compute the
/// recommendation list of one user.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendRequest {
    pub user_id: UserId,
}

/// Body of `POST /api/ratings`.
///
/// Both rating pickers send this exact shape, timestamp included.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingSubmission {
    pub user_id: UserId,
    pub movie_id: MovieId,
    pub rating: Rating,
    /// ISO-8601 UTC instant with millisecond precision, e.g. `2024-05-01T12:00:00.000Z`.
    pub timestamp: String,
}

impl RatingSubmission {
    pub fn new(user_id: UserId, movie_id: MovieId, rating: Rating, at: DateTime<Utc>) -> Self {
        Self {
            user_id,
            movie_id,
            rating,
            timestamp: at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}
