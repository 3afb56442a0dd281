//! Request handlers.
//!
//! Handlers pull data out of [`AppState`](crate::state::AppState) and hand
//! it to the views. View rendering (and the gallery directory scan bundled
//! with it) is blocking work and runs on the blocking pool.

pub mod pages;
