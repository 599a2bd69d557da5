//! Shared application state for all routes.

use crate::service::ForumModel;

#[derive(Clone)]
pub struct AppState {
    pub forums: ForumModel,
}

impl AppState {
    pub fn new(forums: ForumModel) -> Self {
        Self { forums }
    }
}
