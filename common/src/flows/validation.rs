use crate::model::user::UserId;

/// Input rejected before any request is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter a search term.")]
    EmptyQuery,
    #[error("Please enter a user ID.")]
    MissingUserId,
    #[error("A rating must be a whole number from 1 to 5.")]
    InvalidRating,
}

/// Returns the trimmed search text, refusing empty or blank input.
pub fn search_query(input: &str) -> Result<&str, ValidationError> {
    let query = input.trim();
    if query.is_empty() {
        Err(ValidationError::EmptyQuery)
    } else {
        Ok(query)
    }
}

pub fn user_id(input: &str) -> Result<UserId, ValidationError> {
    UserId::parse(input)
}
