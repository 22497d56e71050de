use async_trait::async_trait;

use crate::domain::models::member::Member;

use super::repository::RepositoryResult;

#[async_trait]
pub trait MemberRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<Member>>;
}
