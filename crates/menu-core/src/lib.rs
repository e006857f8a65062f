//! # Menu Core
//!
//! Menu domain, category grouping and ordering, HTML rendering, and form-error mapping.

pub mod collation;
pub mod domain;
pub mod forms;
pub mod grouping;
pub mod render;

// Re-export domain entities
pub use domain::*;
pub use forms::{ErrorPayload, FormErrors};
pub use grouping::{build_menu, group_by_category};
