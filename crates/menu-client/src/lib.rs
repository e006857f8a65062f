//! # Menu Client
//!
//! REST client for the menu backend: public menu fetch, login, and the
//! authenticated item writes. The bearer credential is always passed in
//! explicitly.

pub mod client;
pub mod credential;
pub mod error;
pub mod upload;

pub use client::MenuApiClient;
pub use credential::{AdminSession, Credential};
pub use error::ClientError;
pub use upload::ImageUpload;
