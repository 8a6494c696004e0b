use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-side identifier of a movie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(pub i64);

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A movie as every view sees it.
///
/// Instances are produced by the API client from [`MovieRow`]s, so views never
/// have to guess which identifier field the server used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub movie_id: MovieId,
    pub title: String,
    /// Server-computed average in `0.0..=5.0`. Search rows carry none.
    pub rating: Option<f64>,
    pub genre: String,
}

impl Movie {
    pub fn new(id: i64, title: &str, rating: f64, genre: &str) -> Self {
        Self {
            movie_id: MovieId(id),
            title: title.to_string(),
            rating: Some(rating),
            genre: genre.to_string(),
        }
    }

    /// Average rating rendered with one decimal, or `-` when unknown.
    pub fn rating_label(&self) -> String {
        match self.rating {
            Some(rating) => format!("{:.1}", rating),
            None => "-".to_string(),
        }
    }
}

/// Raw movie row as returned by `/api/search` and `/api/recommended`.
///
/// The search endpoint returns plain `movies` rows while the recommendation
/// endpoint joins them, so any column may be missing or `null` and the
/// identifier shows up as either `movieId` or `id`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MovieRow {
    #[serde(rename = "movieId", default)]
    pub movie_id: Option<i64>,
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub genre: Option<String>,
}

impl MovieRow {
    /// Normalizes the row, returning `None` when it carries no identifier.
    pub fn into_movie(self) -> Option<Movie> {
        let id = self.movie_id.or(self.id)?;
        Some(Movie {
            movie_id: MovieId(id),
            title: self.title.unwrap_or_default(),
            rating: self.rating,
            genre: self.genre.unwrap_or_default(),
        })
    }
}

/// Fixed "popular movies" shelf shown on the home page.
pub fn popular_movies() -> Vec<Movie> {
    vec![
        Movie::new(1, "The Matrix", 4.8, "Action"),
        Movie::new(2, "Inception", 4.7, "Sci-Fi"),
        Movie::new(3, "Godfather", 4.6, "Crime"),
    ]
}
