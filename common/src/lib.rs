//! Shared core of the movie client: data model, wire payloads, configuration,
//! the HTTP API client and the page flows driven by the Yew frontend.
//!
//! Nothing in this crate touches the DOM, so everything here runs and is
//! tested on the host target.

pub mod api;
pub mod config;
pub mod flows;
pub mod model;
pub mod requests;
