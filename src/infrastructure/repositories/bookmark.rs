use std::sync::Arc;

use async_trait::async_trait;
use surrealdb::Surreal;
use surrealdb::engine::remote::ws::Client;

use crate::domain::models::bookmark::{Bookmark, CreateBookmark};
use crate::domain::repositories::bookmark::BookmarkRepository;
use crate::domain::repositories::repository::RepositoryResult;
use crate::infrastructure::models::bookmark::{SurrealBookmark, SurrealBookmarkCreate};

pub struct BookmarkRepositoryImpl {
    db: Arc<Surreal<Client>>,
}

impl BookmarkRepositoryImpl {
    pub fn new(db: Arc<Surreal<Client>>) -> Self {
        Self { db }
    }
}

const BOOKMARK: &str = "bookmark";

#[async_trait]
impl BookmarkRepository for BookmarkRepositoryImpl {
    async fn create(&self, new_bookmark: CreateBookmark) -> RepositoryResult<Bookmark> {
        let bookmark: SurrealBookmark = self
            .db
            .create(BOOKMARK)
            .content(SurrealBookmarkCreate::from(new_bookmark))
            .await?
            .unwrap();

        Ok(bookmark.into())
    }
}

#[cfg(test)]
pub mod mock {
    use tokio::sync::Mutex;

    use super::*;

    pub struct BookmarkRepositoryImpl {
        pub bookmarks: Mutex<Vec<Bookmark>>,
    }

    #[async_trait]
    impl BookmarkRepository for BookmarkRepositoryImpl {
        async fn create(&self, new_bookmark: CreateBookmark) -> RepositoryResult<Bookmark> {
            let mut bookmarks = self.bookmarks.lock().await;

            let bookmark = Bookmark {
                id: "1".to_string(),
                store_id: new_bookmark.store_id,
                user_id: new_bookmark.user_id,
                member_email: new_bookmark.member_email,
            };

            bookmarks.push(bookmark.clone());

            Ok(bookmark)
        }
    }
}
