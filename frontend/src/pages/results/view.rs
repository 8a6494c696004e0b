use yew::prelude::*;

use crate::components::movie_card::{MovieCard, PickerStyle};
use crate::components::movie_grid::MovieGrid;

use super::messages::Msg;
use super::state::{Body, ResultsPage};

pub fn view(page: &ResultsPage, ctx: &Context<ResultsPage>) -> Html {
    let link = ctx.link();
    let kind = &ctx.props().kind;
    let picker_label = match page.picker {
        PickerStyle::Stars => "Use number input",
        PickerStyle::Stepper => "Use stars",
    };

    html! {
        <div class="results">
            <div class="results-header">
                <h1 class="page-title">{ kind.heading(page.listing.query()) }</h1>
                <div class="results-actions">
                    <button class="secondary-button" onclick={link.callback(|_| Msg::TogglePicker)}>
                        { picker_label }
                    </button>
                    <button class="secondary-button" onclick={link.callback(|_| Msg::BackToHome)}>
                        {"Back to home"}
                    </button>
                </div>
            </div>
            { build_body(page, ctx) }
        </div>
    }
}

fn build_body(page: &ResultsPage, ctx: &Context<ResultsPage>) -> Html {
    let movies = match page.listing.body(&ctx.props().kind) {
        Body::Loading => return html! { <p class="results-status">{"Loading…"}</p> },
        Body::Empty(message) => {
            return html! {
                <div class="results-empty">
                    <p>{ message }</p>
                </div>
            }
        }
        Body::Cards(movies) => movies,
    };

    let config = ctx.props().config.clone();
    let user_id = config.rater_user_id;
    let picker = page.picker;
    html! {
        <MovieGrid columns={3}>
            { for movies.iter().map(|movie| html! {
                <MovieCard
                    key={movie.movie_id.0}
                    movie={movie.clone()}
                    {user_id}
                    config={config.clone()}
                    {picker}
                />
            }) }
        </MovieGrid>
    }
}
