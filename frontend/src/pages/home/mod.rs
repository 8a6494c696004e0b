//! Home page: movie search, the popular and featured shelves, and the two
//! user-id forms for creating and opening recommendations.
//!
//! On first render the featured shelf is loaded for the configured user.
//! Each form action runs a `common::flows::home` operation and applies the
//! returned `Effect`: navigating with the results or alerting.

use std::rc::Rc;

use common::config::AppConfig;
use common::flows::home;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::helpers::alert;
use crate::transport::api_client;

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::HomePage;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub config: Rc<AppConfig>,
}

impl Component for HomePage {
    type Message = Msg;
    type Properties = HomeProps;

    fn create(_ctx: &Context<Self>) -> Self {
        HomePage::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;

            let config = ctx.props().config.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let client = api_client(&config);
                match home::load_recommendations(&client, config.featured_user_id).await {
                    Ok(movies) => link.send_message(Msg::FeaturedLoaded(movies)),
                    Err(message) => alert(&message),
                }
            });
        }
    }
}
