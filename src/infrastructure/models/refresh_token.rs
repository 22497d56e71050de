use serde::Deserialize;
use surrealdb::sql::Thing;

use crate::domain::models::token::RefreshTokenRecord;

#[derive(Debug, Deserialize)]
pub struct SurrealRefreshToken {
    #[allow(dead_code)]
    id: Thing,
    email: String,
    token: String,
}

impl From<SurrealRefreshToken> for RefreshTokenRecord {
    fn from(record: SurrealRefreshToken) -> Self {
        RefreshTokenRecord {
            email: record.email,
            token: record.token,
        }
    }
}
