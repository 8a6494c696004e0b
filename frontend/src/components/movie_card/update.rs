use common::flows::rating;
use common::model::rating::Rating;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::helpers::{alert, now};
use crate::transport::api_client;

use super::messages::Msg;
use super::state::MovieCard;

pub fn update(card: &mut MovieCard, ctx: &Context<MovieCard>, msg: Msg) -> bool {
    match msg {
        Msg::Enter => {
            card.panel.enter();
            true
        }
        Msg::Leave => {
            card.panel.leave();
            true
        }
        Msg::Select(rating) => {
            card.panel.select(rating);
            card.stepper_text = rating.to_string();
            true
        }
        Msg::StepperInput(text) => {
            match text.parse::<Rating>() {
                Ok(rating) => card.panel.select(rating),
                Err(_) => card.panel.clear(),
            }
            card.stepper_text = text;
            true
        }
        Msg::Submit => {
            let props = ctx.props();
            let Some(submission) = card.panel.prepare(props.user_id, props.movie.movie_id, now())
            else {
                return false;
            };

            let client = api_client(&props.config);
            let link = ctx.link().clone();
            spawn_local(async move {
                let outcome = rating::submit(&client, &submission).await;
                link.send_message(Msg::Submitted(outcome));
            });
            false
        }
        Msg::Submitted(outcome) => {
            alert(outcome.message());
            card.panel.finish(&outcome);
            true
        }
    }
}
