//! Domain logic for the portfolio site.
//!
//! Holds the project registry (the single in-code source of truth for
//! portfolio entries), gallery resolution (authored lists or directory
//! scans), and caption derivation. No HTTP or rendering concerns live
//! here; the web crate consumes these types and feeds them to its views.

pub mod caption;
pub mod error;
pub mod gallery;
pub mod project;
pub mod registry;
