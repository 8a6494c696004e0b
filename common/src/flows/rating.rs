//! Hover-to-rate panel of a movie card and the submission it produces.

use chrono::{DateTime, Utc};
use log::{error, info};

use crate::api::{ApiClient, ApiError, Transport};
use crate::model::movie::MovieId;
use crate::model::rating::Rating;
use crate::model::user::UserId;
use crate::requests::RatingSubmission;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum PanelMode {
    /// Card shown without the overlay.
    #[default]
    Idle,
    /// Overlay with the rating picker shown.
    Rating,
}

/// State of one card's rating overlay.
///
/// The pending rating survives leaving and re-entering the card; it is only
/// sent when the user submits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RatingPanel {
    mode: PanelMode,
    pending: Option<Rating>,
}

impl RatingPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.mode == PanelMode::Rating
    }

    pub fn pending(&self) -> Option<Rating> {
        self.pending
    }

    pub fn enter(&mut self) {
        self.mode = PanelMode::Rating;
    }

    pub fn leave(&mut self) {
        self.mode = PanelMode::Idle;
    }

    pub fn select(&mut self, rating: Rating) {
        self.pending = Some(rating);
    }

    pub fn clear(&mut self) {
        self.pending = None;
    }

    /// Builds the request body, or `None` while no rating is selected.
    pub fn prepare(
        &self,
        user_id: UserId,
        movie_id: MovieId,
        at: DateTime<Utc>,
    ) -> Option<RatingSubmission> {
        self.pending
            .map(|rating| RatingSubmission::new(user_id, movie_id, rating, at))
    }

    /// Applies the outcome of a submission: success closes the overlay,
    /// failure keeps it open with the selection intact.
    pub fn finish(&mut self, outcome: &RatingOutcome) {
        if matches!(outcome, RatingOutcome::Saved) {
            self.mode = PanelMode::Idle;
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RatingOutcome {
    Saved,
    /// The server answered with a non-2xx status.
    Rejected(u16),
    /// No usable answer: network failure or a request that could not be built.
    Failed(ApiError),
}

impl RatingOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            RatingOutcome::Saved => "Rating added successfully",
            RatingOutcome::Rejected(_) => "Failed to add rating",
            RatingOutcome::Failed(_) => "An error occurred while submitting rating",
        }
    }
}

/// Sends one rating. Every call issues its own request; concurrent or
/// repeated submissions for the same movie are not coalesced.
pub async fn submit<T: Transport>(
    client: &ApiClient<T>,
    submission: &RatingSubmission,
) -> RatingOutcome {
    match client.submit_rating(submission).await {
        Ok(()) => {
            info!(
                "user {} rated movie {} with {}",
                submission.user_id, submission.movie_id, submission.rating
            );
            RatingOutcome::Saved
        }
        Err(ApiError::Status(status)) => {
            error!(
                "rating for movie {} rejected with status {}",
                submission.movie_id, status
            );
            RatingOutcome::Rejected(status)
        }
        Err(err) => {
            error!("error submitting rating for movie {}: {}", submission.movie_id, err);
            RatingOutcome::Failed(err)
        }
    }
}
