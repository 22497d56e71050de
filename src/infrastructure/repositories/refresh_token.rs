use std::sync::Arc;

use async_trait::async_trait;
use surrealdb::Surreal;
use surrealdb::engine::remote::ws::Client;

use crate::domain::models::token::RefreshTokenRecord;
use crate::domain::repositories::refresh_token::RefreshTokenRepository;
use crate::domain::repositories::repository::RepositoryResult;
use crate::infrastructure::models::refresh_token::SurrealRefreshToken;

pub struct RefreshTokenRepositoryImpl {
    db: Arc<Surreal<Client>>,
}

impl RefreshTokenRepositoryImpl {
    pub fn new(db: Arc<Surreal<Client>>) -> Self {
        Self { db }
    }
}

const REFRESH_TOKEN: &str = "refresh_token";

#[async_trait]
impl RefreshTokenRepository for RefreshTokenRepositoryImpl {
    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<RefreshTokenRecord>> {
        let record: Option<SurrealRefreshToken> = self
            .db
            .query("SELECT * FROM type::table($table) WHERE email = type::string($email)")
            .bind(("table", REFRESH_TOKEN))
            .bind(("email", email.to_owned()))
            .await?
            .take(0)?;

        Ok(record.map(Into::into))
    }
}
