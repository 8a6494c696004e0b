//! Movie card with a hover-to-rate overlay.
//!
//! The card shows title, average rating and genre. Hovering opens the rating
//! overlay; submitting posts the selected score for the rater given in props.
//! The overlay logic itself is `common::flows::rating::RatingPanel`; this
//! module wires it to Yew.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::{MovieCardProps, PickerStyle};
pub use state::MovieCard;

impl Component for MovieCard {
    type Message = Msg;
    type Properties = MovieCardProps;

    fn create(_ctx: &Context<Self>) -> Self {
        MovieCard::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
