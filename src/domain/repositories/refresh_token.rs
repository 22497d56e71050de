use async_trait::async_trait;

use crate::domain::models::token::RefreshTokenRecord;

use super::repository::RepositoryResult;

/// Read-only view of the refresh token store; rotation writes happen in
/// the login flow, not here.
#[async_trait]
pub trait RefreshTokenRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<RefreshTokenRecord>>;
}
