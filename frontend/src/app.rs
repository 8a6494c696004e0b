use std::rc::Rc;

use common::config::AppConfig;
use common::flows::Destination;
use common::model::user::UserId;
use yew::{html, Callback, Component, Context, Html, Properties};
use yew_router::prelude::*;

use crate::pages::home::HomePage;
use crate::pages::results::{ResultsKind, ResultsPage};

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/search-results")]
    SearchResults,
    #[at("/user/:user_id")]
    UserRecommendations { user_id: u64 },
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl From<&Destination> for Route {
    fn from(destination: &Destination) -> Self {
        match destination {
            Destination::SearchResults => Route::SearchResults,
            Destination::UserRecommendations(user_id) => Route::UserRecommendations {
                user_id: user_id.get(),
            },
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: Rc<AppConfig>,
}

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = AppProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let config = ctx.props().config.clone();
        let render = Callback::from(move |route: Route| switch(route, &config));

        html! {
            <BrowserRouter>
                <div class="container">
                    <Switch<Route> {render} />
                </div>
            </BrowserRouter>
        }
    }
}

fn switch(route: Route, config: &Rc<AppConfig>) -> Html {
    let config = config.clone();
    match route {
        Route::SearchResults => html! {
            <ResultsPage kind={ResultsKind::Search} {config} />
        },
        Route::UserRecommendations { user_id } => match UserId::new(user_id) {
            Some(user_id) => html! {
                <ResultsPage kind={ResultsKind::User(user_id)} {config} />
            },
            None => html! { <HomePage {config} /> },
        },
        Route::Home | Route::NotFound => html! { <HomePage {config} /> },
    }
}
