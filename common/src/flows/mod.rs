//! User-triggered operations of the client, free of any DOM code.
//!
//! Each flow validates its input, talks to the API and reports a single
//! [`Effect`] for the component to carry out. A flow never mutates page state
//! itself, so a failing call cannot leave a page half-updated.

pub mod home;
pub mod rating;
pub mod validation;

use crate::model::navigation::ResultsState;
use crate::model::user::UserId;

/// Result pages a flow can navigate to.
#[derive(Debug, Clone, PartialEq)]
pub enum Destination {
    SearchResults,
    UserRecommendations(UserId),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Move to `to`, handing it `state` through the route transition.
    Navigate { to: Destination, state: ResultsState },
    /// Show a blocking message and stay put.
    Alert(String),
}
