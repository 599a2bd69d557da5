//! Forum API: a single REST resource for forum listings, validated and stored in PostgreSQL.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod models;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;
pub mod validator;

pub use config::{Config, StoreKind};
pub use error::{AppError, ConfigError, ModelError};
pub use migration::{ensure_database_exists, ensure_forums_table};
pub use models::{Forum, ForumInput};
pub use routes::{app_router, common_routes, forum_routes};
pub use service::{validate_forum, ForumModel};
pub use state::AppState;
pub use store::{ForumStore, MemoryForumStore, PgForumStore};
pub use validator::Validator;
