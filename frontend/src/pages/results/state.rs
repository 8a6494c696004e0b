use std::rc::Rc;

use common::model::movie::Movie;
use common::model::navigation::ResultsState;
use common::model::user::UserId;

use crate::components::movie_card::PickerStyle;

#[derive(Debug, Clone, PartialEq)]
pub enum ResultsKind {
    Search,
    User(UserId),
}

impl ResultsKind {
    pub fn heading(&self, query: Option<&str>) -> String {
        match self {
            ResultsKind::Search => match query {
                Some(query) => format!("Search results for \"{}\"", query),
                None => "Search results".to_string(),
            },
            ResultsKind::User(user_id) => format!("Recommended movies for user {}", user_id),
        }
    }

    pub fn empty_message(&self) -> &'static str {
        match self {
            ResultsKind::Search => "No search results.",
            ResultsKind::User(_) => "No recommended movies.",
        }
    }
}

/// What the page currently has to show.
#[derive(Debug, Clone, PartialEq)]
pub enum Listing {
    Ready(Rc<ResultsState>),
    Loading,
    /// Opened without results and nothing to reload from.
    Missing,
}

impl Listing {
    pub fn query(&self) -> Option<&str> {
        match self {
            Listing::Ready(state) => Some(state.query.as_str()),
            _ => None,
        }
    }

    pub fn body(&self, kind: &ResultsKind) -> Body<'_> {
        match self {
            Listing::Loading => Body::Loading,
            Listing::Missing => Body::Empty(kind.empty_message()),
            Listing::Ready(state) if state.results.is_empty() => Body::Empty(kind.empty_message()),
            Listing::Ready(state) => Body::Cards(&state.results),
        }
    }
}

/// What the page body renders, decided from the listing and page kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Body<'a> {
    Loading,
    Empty(&'static str),
    Cards(&'a [Movie]),
}

pub struct ResultsPage {
    pub listing: Listing,
    pub picker: PickerStyle,
}

impl ResultsPage {
    pub fn new(kind: &ResultsKind, carried: Option<Rc<ResultsState>>) -> Self {
        let listing = match (carried, kind) {
            (Some(state), _) => Listing::Ready(state),
            (None, ResultsKind::User(_)) => Listing::Loading,
            (None, ResultsKind::Search) => Listing::Missing,
        };
        Self {
            listing,
            picker: PickerStyle::default(),
        }
    }
}
