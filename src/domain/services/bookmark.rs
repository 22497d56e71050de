use async_trait::async_trait;

use crate::domain::error::AppResult;
use crate::domain::models::member::Member;

#[async_trait]
pub trait BookmarkService: 'static + Sync + Send {
    async fn bookmark_store(&self, store_id: i64, user_id: i64, member: Member) -> AppResult<()>;
}
