//! Controlled text input shared by the movie search and the user-id forms.

use web_sys::HtmlInputElement;
use yew::prelude::*;

pub const MOVIE_PLACEHOLDER: &str = "Search movies by title or genre.";
pub const USER_PLACEHOLDER: &str = "Enter a user ID.";

#[derive(Properties, PartialEq)]
pub struct SearchBarProps {
    pub value: AttrValue,
    pub placeholder: AttrValue,
    pub on_change: Callback<String>,
    /// Fired when Enter is pressed inside the input.
    #[prop_or_default]
    pub on_search: Option<Callback<()>>,
}

pub struct SearchBar;

impl Component for SearchBar {
    type Message = ();
    type Properties = SearchBarProps;

    fn create(_ctx: &Context<Self>) -> Self {
        SearchBar
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();

        let oninput = props.on_change.reform(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            input.value()
        });

        let onkeydown = {
            let on_search = props.on_search.clone();
            Callback::from(move |e: KeyboardEvent| {
                if e.key() == "Enter" {
                    if let Some(on_search) = &on_search {
                        on_search.emit(());
                    }
                }
            })
        };

        html! {
            <div class="search-bar">
                <input
                    type="text"
                    class="search-input"
                    value={props.value.clone()}
                    placeholder={props.placeholder.clone()}
                    {oninput}
                    {onkeydown}
                />
            </div>
        }
    }
}
