use common::flows::Effect;
use common::model::movie::Movie;

pub enum Msg {
    SetSearch(String),
    SetCreateUserId(String),
    SetFetchUserId(String),
    Search,
    CreateRecommendations,
    FetchRecommendations,
    FeaturedLoaded(Vec<Movie>),
    Apply(Effect),
}
