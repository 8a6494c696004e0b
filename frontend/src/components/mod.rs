pub mod movie_card;
pub mod movie_grid;
pub mod movie_list;
pub mod search_bar;
