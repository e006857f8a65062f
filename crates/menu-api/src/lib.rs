//! # Menu API
//!
//! HTTP handlers for the public menu page and the admin item list.

pub mod error;
pub mod handlers;
pub mod response;
pub mod router;
pub mod source;
pub mod state;

pub use router::build_router;
pub use state::AppState;
