use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::flows::validation::ValidationError;

/// A user's score for one movie, always within `1..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn value(self) -> u8 {
        self.0
    }

    /// Every valid rating in ascending order, one per star button.
    pub fn all() -> impl Iterator<Item = Rating> {
        (Self::MIN..=Self::MAX).map(Rating)
    }
}

impl TryFrom<i64> for Rating {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (Self::MIN as i64..=Self::MAX as i64).contains(&value) {
            Ok(Rating(value as u8))
        } else {
            Err(ValidationError::InvalidRating)
        }
    }
}

impl From<Rating> for i64 {
    fn from(rating: Rating) -> Self {
        rating.0 as i64
    }
}

impl FromStr for Rating {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<i64>()
            .map_err(|_| ValidationError::InvalidRating)?;
        Rating::try_from(value)
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_enforced() {
        assert!(Rating::try_from(0i64).is_err());
        assert!(Rating::try_from(6i64).is_err());
        assert!(Rating::try_from(-3i64).is_err());
        assert_eq!(Rating::try_from(1i64).unwrap().value(), 1);
        assert_eq!(Rating::try_from(5i64).unwrap().value(), 5);
    }

    #[test]
    fn parses_stepper_text() {
        assert_eq!(" 4 ".parse::<Rating>().unwrap().value(), 4);
        assert!("".parse::<Rating>().is_err());
        assert!("4.5".parse::<Rating>().is_err());
        assert!("10".parse::<Rating>().is_err());
    }

    #[test]
    fn all_yields_one_to_five() {
        let values: Vec<u8> = Rating::all().map(Rating::value).collect();
        assert_eq!(values, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn serializes_as_plain_integer() {
        let rating = Rating::try_from(3i64).unwrap();
        assert_eq!(serde_json::to_string(&rating).unwrap(), "3");
        assert!(serde_json::from_str::<Rating>("9").is_err());
    }
}
