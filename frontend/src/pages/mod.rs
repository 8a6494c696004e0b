pub mod home;
pub mod results;
