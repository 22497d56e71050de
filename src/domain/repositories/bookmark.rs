use async_trait::async_trait;

use crate::domain::models::bookmark::{Bookmark, CreateBookmark};

use super::repository::RepositoryResult;

#[async_trait]
pub trait BookmarkRepository: Send + Sync {
    async fn create(&self, new_bookmark: CreateBookmark) -> RepositoryResult<Bookmark>;
}
