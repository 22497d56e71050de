use std::sync::Arc;

use crate::domain::{
    error::AppResult,
    models::bookmark::CreateBookmark,
    models::member::Member,
    repositories::bookmark::BookmarkRepository,
    services::bookmark::BookmarkService,
};

use async_trait::async_trait;

pub struct BookmarkServiceImpl {
    repository: Arc<dyn BookmarkRepository>,
}

impl BookmarkServiceImpl {
    pub fn new(repository: Arc<dyn BookmarkRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl BookmarkService for BookmarkServiceImpl {
    async fn bookmark_store(&self, store_id: i64, user_id: i64, member: Member) -> AppResult<()> {
        self.repository
            .create(CreateBookmark {
                store_id,
                user_id,
                member_email: member.email,
            })
            .await?;

        Ok(())
    }
}
