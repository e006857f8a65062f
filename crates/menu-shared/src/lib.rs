//! # Menu Shared
//!
//! Configuration, telemetry, constants, and locale labels shared by the menu site crates.

pub mod config;
pub mod constants;
pub mod error;
pub mod telemetry;
pub mod types;

pub use error::AppError;
pub use types::*;
