use common::model::rating::Rating;
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::props::PickerStyle;
use super::state::MovieCard;

pub fn view(card: &MovieCard, ctx: &Context<MovieCard>) -> Html {
    let link = ctx.link();
    let movie = &ctx.props().movie;

    html! {
        <div
            class="movie-card"
            onmouseenter={link.callback(|_: MouseEvent| Msg::Enter)}
            onmouseleave={link.callback(|_: MouseEvent| Msg::Leave)}
        >
            <div class="movie-card-body">
                <h3 class="movie-card-title">{ movie.title.clone() }</h3>
                <div class="movie-card-meta">
                    <span>{ format!("Rating: {}", movie.rating_label()) }</span>
                    <span>{ format!("Genre: {}", movie.genre) }</span>
                </div>
            </div>
            {
                if card.panel.is_open() {
                    build_overlay(card, ctx)
                } else {
                    html! {}
                }
            }
        </div>
    }
}

fn build_overlay(card: &MovieCard, ctx: &Context<MovieCard>) -> Html {
    let link = ctx.link();
    let picker = match ctx.props().picker {
        PickerStyle::Stars => build_stars(card, link),
        PickerStyle::Stepper => build_stepper(card, link),
    };

    html! {
        <div class="rating-overlay">
            <div class="rating-dialog">
                <h4>{"Rate this movie"}</h4>
                { picker }
                {
                    match card.panel.pending() {
                        Some(rating) => html! { <p class="rating-choice">{ format!("Your rating: {}", rating) }</p> },
                        None => html! {},
                    }
                }
                <button class="rating-submit" onclick={link.callback(|_| Msg::Submit)}>
                    {"Submit Rating"}
                </button>
            </div>
        </div>
    }
}

fn build_stars(card: &MovieCard, link: &Scope<MovieCard>) -> Html {
    let pending = card.panel.pending();
    html! {
        <div class="rating-stars">
            { for Rating::all().map(|rating| {
                let lit = pending.is_some_and(|p| p >= rating);
                html! {
                    <button
                        key={rating.to_string()}
                        class={classes!("star", lit.then_some("lit"))}
                        onclick={link.callback(move |_| Msg::Select(rating))}
                    >
                        {"★"}
                    </button>
                }
            }) }
        </div>
    }
}

fn build_stepper(card: &MovieCard, link: &Scope<MovieCard>) -> Html {
    let invalid = !card.stepper_text.is_empty() && card.panel.pending().is_none();
    html! {
        <div class="rating-stepper">
            <input
                type="number"
                min={Rating::MIN.to_string()}
                max={Rating::MAX.to_string()}
                placeholder="Rate this movie"
                value={card.stepper_text.clone()}
                oninput={link.callback(|e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    Msg::StepperInput(input.value())
                })}
            />
            {
                if invalid {
                    html! { <p class="rating-hint">{"Enter a whole number from 1 to 5."}</p> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
