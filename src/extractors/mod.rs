//! Request extractors that reject with `AppError`.

mod id;
mod json;
pub use id::{read_id_param, ForumId};
pub use json::ReadJson;
