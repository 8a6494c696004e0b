use std::fmt;

use serde::{Deserialize, Serialize};

use crate::flows::validation::ValidationError;

/// Identifier of a user of the recommendation service. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u64);

impl UserId {
    pub fn new(id: u64) -> Option<Self> {
        (id != 0).then_some(UserId(id))
    }

    /// Caller guarantees `id != 0`.
    pub(crate) const fn new_unchecked(id: u64) -> Self {
        UserId(id)
    }

    /// Parses the text of a user-id input box.
    ///
    /// Surrounding whitespace is ignored. Empty input, anything that is not a
    /// non-negative integer, and `0` are all reported as a missing user id.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        input
            .trim()
            .parse::<u64>()
            .ok()
            .and_then(UserId::new)
            .ok_or(ValidationError::MissingUserId)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_padded_numbers() {
        assert_eq!(UserId::parse(" 42 ").unwrap().get(), 42);
    }

    #[test]
    fn parse_rejects_falsy_input() {
        for input in ["", "   ", "0", "abc", "-4", "1.5"] {
            assert_eq!(
                UserId::parse(input),
                Err(ValidationError::MissingUserId),
                "input {:?}",
                input
            );
        }
    }
}
