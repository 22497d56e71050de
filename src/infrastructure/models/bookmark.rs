use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;

use crate::domain::models::bookmark::{Bookmark, CreateBookmark};

#[derive(Debug, Deserialize)]
pub struct SurrealBookmark {
    id: Thing,
    store_id: i64,
    user_id: i64,
    member_email: String,
}

#[derive(Serialize)]
pub struct SurrealBookmarkCreate {
    store_id: i64,
    user_id: i64,
    member_email: String,
}

impl From<CreateBookmark> for SurrealBookmarkCreate {
    fn from(bookmark: CreateBookmark) -> Self {
        SurrealBookmarkCreate {
            store_id: bookmark.store_id,
            user_id: bookmark.user_id,
            member_email: bookmark.member_email,
        }
    }
}

impl From<SurrealBookmark> for Bookmark {
    fn from(bookmark: SurrealBookmark) -> Self {
        Bookmark {
            id: bookmark.id.id.to_string(),
            store_id: bookmark.store_id,
            user_id: bookmark.user_id,
            member_email: bookmark.member_email,
        }
    }
}
