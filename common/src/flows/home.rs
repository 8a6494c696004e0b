//! Operations behind the home page's three forms and its featured shelf.

use log::{error, info};

use crate::api::{ApiClient, ApiResult, Transport};
use crate::model::movie::Movie;
use crate::model::navigation::ResultsState;
use crate::model::user::UserId;

use super::validation;
use super::{Destination, Effect};

/// Searches by title or genre and opens the results page.
///
/// Surrounding whitespace is trimmed from `input`; the trimmed text is what
/// gets sent and what the results page receives as its query.
pub async fn search<T: Transport>(client: &ApiClient<T>, input: &str) -> Effect {
    let query = match validation::search_query(input) {
        Ok(query) => query,
        Err(err) => return Effect::Alert(err.to_string()),
    };

    match client.search(query).await {
        Ok(results) => {
            info!("search {:?} returned {} movies", query, results.len());
            Effect::Navigate {
                to: Destination::SearchResults,
                state: ResultsState::new(results, query),
            }
        }
        Err(err) => {
            error!("search {:?} failed: {}", query, err);
            Effect::Alert(format!("An error occurred while searching: {}", err))
        }
    }
}

/// Asks the server to generate recommendations for the typed user id.
/// Reports the outcome only; nothing is displayed or refreshed.
pub async fn create_recommendations<T: Transport>(client: &ApiClient<T>, input: &str) -> Effect {
    let user_id = match validation::user_id(input) {
        Ok(user_id) => user_id,
        Err(err) => return Effect::Alert(err.to_string()),
    };

    match client.create_recommendations(user_id).await {
        Ok(()) => {
            info!("recommendations created for user {}", user_id);
            Effect::Alert(format!("Recommendations created for user {}.", user_id))
        }
        Err(err) => {
            error!("creating recommendations for user {} failed: {}", user_id, err);
            Effect::Alert(format!(
                "An error occurred while creating recommendations: {}",
                err
            ))
        }
    }
}

/// Loads the stored recommendations of the typed user id and opens that
/// user's page.
pub async fn user_recommendations<T: Transport>(client: &ApiClient<T>, input: &str) -> Effect {
    let user_id = match validation::user_id(input) {
        Ok(user_id) => user_id,
        Err(err) => return Effect::Alert(err.to_string()),
    };

    match load_recommendations(client, user_id).await {
        Ok(results) => Effect::Navigate {
            to: Destination::UserRecommendations(user_id),
            state: ResultsState::new(results, user_id.to_string()),
        },
        Err(message) => Effect::Alert(message),
    }
}

/// Fetches the recommendation list of `user_id`, turning a failure into the
/// message to alert. Also used for the featured shelf and for direct visits
/// to a user's page.
pub async fn load_recommendations<T: Transport>(
    client: &ApiClient<T>,
    user_id: UserId,
) -> Result<Vec<Movie>, String> {
    let result: ApiResult<Vec<Movie>> = client.recommended(user_id).await;
    result.map_err(|err| {
        error!("loading recommendations for user {} failed: {}", user_id, err);
        format!("An error occurred while loading recommendations: {}", err)
    })
}

/// Splits a recommendation list into the movies shown as full cards and the
/// overflow listed by title only.
pub fn split_featured(movies: &[Movie], limit: usize) -> (&[Movie], &[Movie]) {
    movies.split_at(limit.min(movies.len()))
}
