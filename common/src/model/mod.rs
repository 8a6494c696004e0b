pub mod movie;
pub mod navigation;
pub mod rating;
pub mod user;
