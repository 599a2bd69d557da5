//! Forum record and its client-facing input shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A forum listing as stored in the `forums` table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Forum {
    pub id: i64,
    #[serde(skip)]
    pub created_at: DateTime<Utc>,
    pub name: String,
    pub level: String,
    pub contact: String,
    pub phone: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub email: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub website: String,
    pub address: String,
    /// `None` only before validation, when the client sent no list.
    pub mode: Option<Vec<String>>,
    pub version: i32,
}

/// Request body for creating a forum. Server-assigned fields are not accepted.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ForumInput {
    pub name: String,
    pub level: String,
    pub contact: String,
    pub phone: String,
    pub email: String,
    pub website: String,
    pub address: String,
    pub mode: Option<Vec<String>>,
}

impl From<ForumInput> for Forum {
    fn from(input: ForumInput) -> Self {
        Forum {
            id: 0,
            created_at: DateTime::<Utc>::UNIX_EPOCH,
            name: input.name,
            level: input.level,
            contact: input.contact,
            phone: input.phone,
            email: input.email,
            website: input.website,
            address: input.address,
            mode: input.mode,
            version: 0,
        }
    }
}
