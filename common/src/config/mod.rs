//! Application configuration, built once at startup and handed down to every
//! component that talks to the API.

use crate::model::user::UserId;

const DEFAULT_RATER_USER_ID: UserId = UserId::new_unchecked(230213);
const DEFAULT_FEATURED_USER_ID: UserId = UserId::new_unchecked(1);
const DEFAULT_FEATURED_LIMIT: usize = 5;

/// Where the recommendation service lives.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ApiConfig {
    /// Scheme and authority (optionally a path prefix) without a trailing `/`.
    /// Empty means same origin.
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Joins `path` (which starts with `/`) onto the base URL.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    /// User that star ratings are submitted for.
    pub rater_user_id: UserId,
    /// User whose recommendations fill the home page shelf.
    pub featured_user_id: UserId,
    /// How many featured recommendations get a full card.
    pub featured_limit: usize,
}

impl AppConfig {
    /// Builds the configuration from the externally supplied base URL.
    /// `None` or a blank value leaves requests on the page's own origin.
    pub fn from_base_url(base_url: Option<&str>) -> Self {
        Self {
            api: ApiConfig::new(base_url.unwrap_or_default()),
            ..Self::default()
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            rater_user_id: DEFAULT_RATER_USER_ID,
            featured_user_id: DEFAULT_FEATURED_USER_ID,
            featured_limit: DEFAULT_FEATURED_LIMIT,
        }
    }
}
