use std::rc::Rc;

use yew::prelude::*;
use yew_router::scope_ext::RouterScopeExt;

use crate::app::Route;

use super::messages::Msg;
use super::state::{Listing, ResultsPage};

pub fn update(page: &mut ResultsPage, ctx: &Context<ResultsPage>, msg: Msg) -> bool {
    match msg {
        Msg::Loaded(state) => {
            page.listing = Listing::Ready(Rc::new(state));
            true
        }
        Msg::LoadFailed => {
            page.listing = Listing::Missing;
            true
        }
        Msg::TogglePicker => {
            page.picker = page.picker.toggled();
            true
        }
        Msg::BackToHome => {
            if let Some(navigator) = ctx.link().navigator() {
                navigator.push(&Route::Home);
            }
            false
        }
    }
}
