use std::rc::Rc;

use common::config::AppConfig;

use crate::app::{App, AppProps};

mod app;
mod components;
mod helpers;
mod logging;
mod pages;
mod transport;

fn main() {
    logging::init();

    let config = AppConfig::from_base_url(option_env!("API_URL"));
    log::info!("using API at {:?}", config.api.base_url);

    yew::Renderer::<App>::with_props(AppProps {
        config: Rc::new(config),
    })
    .render();
}
