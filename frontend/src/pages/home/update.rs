use std::future::Future;

use common::api::ApiClient;
use common::flows::{home, Effect};
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::scope_ext::RouterScopeExt;

use crate::app::Route;
use crate::helpers::alert;
use crate::transport::{api_client, GlooTransport};

use super::messages::Msg;
use super::state::HomePage;

pub fn update(page: &mut HomePage, ctx: &Context<HomePage>, msg: Msg) -> bool {
    match msg {
        Msg::SetSearch(text) => {
            page.search = text;
            true
        }
        Msg::SetCreateUserId(text) => {
            page.create_user_id = text;
            true
        }
        Msg::SetFetchUserId(text) => {
            page.fetch_user_id = text;
            true
        }
        Msg::Search => {
            let input = page.search.clone();
            run_flow(ctx, move |client| async move { home::search(&client, &input).await });
            false
        }
        Msg::CreateRecommendations => {
            let input = page.create_user_id.clone();
            run_flow(ctx, move |client| async move {
                home::create_recommendations(&client, &input).await
            });
            false
        }
        Msg::FetchRecommendations => {
            let input = page.fetch_user_id.clone();
            run_flow(ctx, move |client| async move {
                home::user_recommendations(&client, &input).await
            });
            false
        }
        Msg::FeaturedLoaded(movies) => {
            page.featured = movies;
            true
        }
        Msg::Apply(Effect::Alert(message)) => {
            alert(&message);
            false
        }
        Msg::Apply(Effect::Navigate { to, state }) => {
            match ctx.link().navigator() {
                Some(navigator) => navigator.push_with_state(&Route::from(&to), state),
                None => log::error!("no router available to open {:?}", to),
            }
            false
        }
    }
}

/// Runs one home flow in the background and feeds its effect back as a message.
fn run_flow<F, Fut>(ctx: &Context<HomePage>, flow: F)
where
    F: FnOnce(ApiClient<GlooTransport>) -> Fut + 'static,
    Fut: Future<Output = Effect> + 'static,
{
    let client = api_client(&ctx.props().config);
    let link = ctx.link().clone();
    spawn_local(async move {
        let effect = flow(client).await;
        link.send_message(Msg::Apply(effect));
    });
}
