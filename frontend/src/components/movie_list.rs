use common::model::movie::Movie;
use yew::{html, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct MovieListProps {
    pub title: String,
    pub movies: Vec<Movie>,
}

/// Titles-only listing, no rating controls.
pub struct MovieList;

impl Component for MovieList {
    type Message = ();
    type Properties = MovieListProps;

    fn create(_ctx: &Context<Self>) -> Self {
        MovieList
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        if props.movies.is_empty() {
            return html! {};
        }

        html! {
            <div class="movie-list">
                <h3 class="movie-list-title">{ props.title.clone() }</h3>
                <ul class="movie-list-grid">
                    { for props.movies.iter().map(|movie| html! {
                        <li key={movie.movie_id.0} class="movie-list-item">{ movie.title.clone() }</li>
                    }) }
                </ul>
            </div>
        }
    }
}
