use common::flows::home::split_featured;
use common::model::movie::{popular_movies, Movie};
use yew::html::Scope;
use yew::prelude::*;

use crate::components::movie_card::MovieCard;
use crate::components::movie_grid::MovieGrid;
use crate::components::movie_list::MovieList;
use crate::components::search_bar::{SearchBar, MOVIE_PLACEHOLDER, USER_PLACEHOLDER};

use super::messages::Msg;
use super::state::HomePage;

pub fn view(page: &HomePage, ctx: &Context<HomePage>) -> Html {
    let link = ctx.link();
    let limit = ctx.props().config.featured_limit;
    let (cards, overflow) = split_featured(&page.featured, limit);

    html! {
        <div class="home">
            <section class="home-section">
                <h1 class="page-title">{"Movie Search"}</h1>
                { build_form(
                    link,
                    &page.search,
                    MOVIE_PLACEHOLDER,
                    "Search",
                    Msg::SetSearch,
                    || Msg::Search,
                ) }
            </section>

            <section class="home-section">
                <h2 class="section-title">{"Popular Movies"}</h2>
                { build_shelf(&popular_movies(), ctx) }
            </section>

            <section class="home-section">
                <h2 class="section-title">{"Recommended Movies"}</h2>
                { build_shelf(cards, ctx) }
                <MovieList title="More recommendations" movies={overflow.to_vec()} />
            </section>

            <section class="home-section">
                <h2 class="section-title">{"Create User Recommendations"}</h2>
                { build_form(
                    link,
                    &page.create_user_id,
                    USER_PLACEHOLDER,
                    "Create",
                    Msg::SetCreateUserId,
                    || Msg::CreateRecommendations,
                ) }
            </section>

            <section class="home-section">
                <h2 class="section-title">{"Load User Recommendations"}</h2>
                { build_form(
                    link,
                    &page.fetch_user_id,
                    USER_PLACEHOLDER,
                    "Load",
                    Msg::SetFetchUserId,
                    || Msg::FetchRecommendations,
                ) }
            </section>
        </div>
    }
}

/// Input plus button; Enter in the input and a click both submit.
fn build_form(
    link: &Scope<HomePage>,
    value: &str,
    placeholder: &'static str,
    label: &'static str,
    on_change: fn(String) -> Msg,
    on_submit: fn() -> Msg,
) -> Html {
    html! {
        <div class="search-container">
            <SearchBar
                value={value.to_string()}
                {placeholder}
                on_change={link.callback(on_change)}
                on_search={Some(link.callback(move |_: ()| on_submit()))}
            />
            <button class="search-button" onclick={link.callback(move |_: MouseEvent| on_submit())}>
                { label }
            </button>
        </div>
    }
}

fn build_shelf(movies: &[Movie], ctx: &Context<HomePage>) -> Html {
    let config = ctx.props().config.clone();
    let user_id = config.rater_user_id;

    html! {
        <MovieGrid scroll=true>
            { for movies.iter().map(|movie| html! {
                <MovieCard
                    key={movie.movie_id.0}
                    movie={movie.clone()}
                    {user_id}
                    config={config.clone()}
                />
            }) }
        </MovieGrid>
    }
}
