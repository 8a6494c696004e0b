//! Result pages for a movie search and for one user's recommendations.
//!
//! Both read the `ResultsState` handed over by the route transition. When a
//! page is opened without it (refresh, typed-in URL) a search page shows its
//! empty state, while a user page reloads the list for the id in the path.

use std::rc::Rc;

use common::config::AppConfig;
use common::flows::home;
use common::model::navigation::ResultsState;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::scope_ext::RouterScopeExt;

use crate::helpers::alert;
use crate::transport::api_client;

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::{Listing, ResultsKind, ResultsPage};

#[derive(Properties, PartialEq)]
pub struct ResultsProps {
    pub kind: ResultsKind,
    pub config: Rc<AppConfig>,
}

impl Component for ResultsPage {
    type Message = Msg;
    type Properties = ResultsProps;

    fn create(ctx: &Context<Self>) -> Self {
        let carried = ctx
            .link()
            .location()
            .and_then(|location| location.state::<ResultsState>());
        ResultsPage::new(&ctx.props().kind, carried)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render || !matches!(self.listing, Listing::Loading) {
            return;
        }
        let ResultsKind::User(user_id) = ctx.props().kind else {
            return;
        };

        let config = ctx.props().config.clone();
        let link = ctx.link().clone();
        spawn_local(async move {
            let client = api_client(&config);
            match home::load_recommendations(&client, user_id).await {
                Ok(movies) => link.send_message(Msg::Loaded(ResultsState::new(
                    movies,
                    user_id.to_string(),
                ))),
                Err(message) => {
                    alert(&message);
                    link.send_message(Msg::LoadFailed);
                }
            }
        });
    }
}
