//! ForumModel: validation rules and store-backed operations for forums.

mod forum;
mod validation;
pub use forum::ForumModel;
pub use validation::validate_forum;
