use yew::{html, Children, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct MovieGridProps {
    /// Column count on wide screens; narrow screens fall back to one.
    #[prop_or(3)]
    pub columns: usize,
    #[prop_or_default]
    pub scroll: bool,
    pub children: Children,
}

/// Responsive container for a list of movie cards.
pub struct MovieGrid;

impl Component for MovieGrid {
    type Message = ();
    type Properties = MovieGridProps;

    fn create(_ctx: &Context<Self>) -> Self {
        MovieGrid
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let style = if props.scroll {
            "display: flex; gap: 1.5rem; overflow-x: auto; padding-bottom: 0.5rem;".to_string()
        } else {
            format!(
                "display: grid;
                 grid-template-columns: repeat(auto-fill, minmax(max(220px, calc(100% / {} - 1.5rem)), 1fr));
                 gap: 1.5rem;",
                props.columns.max(1)
            )
        };

        html! {
            <div class="movie-grid" style={style}>
                { for props.children.iter() }
            </div>
        }
    }
}
