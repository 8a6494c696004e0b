use serde::{Deserialize, Serialize};

use crate::model::movie::Movie;

/// Payload carried by a route transition into a results page.
///
/// It only lives in the router's history entry; a refresh or a typed-in URL
/// arrives without it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResultsState {
    pub results: Vec<Movie>,
    pub query: String,
}

impl ResultsState {
    pub fn new(results: Vec<Movie>, query: impl Into<String>) -> Self {
        Self {
            results,
            query: query.into(),
        }
    }
}
