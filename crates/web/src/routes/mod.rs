//! Route definitions.
//!
//! Each submodule builds a [`Router`](axum::Router) for one slice of the
//! site; `router::build_app_router` merges them and applies middleware.

pub mod health;
pub mod pages;
