//! HTTP handlers for the forum resource.

pub mod forum;
pub use forum::*;
