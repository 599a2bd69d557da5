//! Domain records.

mod forum;
pub use forum::{Forum, ForumInput};
