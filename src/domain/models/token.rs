use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::domain::models::member::MemberRole;

pub const BEARER_PREFIX: &str = "Bearer ";
pub const ACCESS_KEY: &str = "ACCESS_KEY";
pub const REFRESH_KEY: &str = "REFRESH_KEY";

/// Registered claims plus the role claim, which keeps its legacy
/// `Authorization` key on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    #[serde(rename = "Authorization")]
    pub role: MemberRole,
    pub exp: i64,
    pub iat: i64,
}

/// Access and refresh tokens share their structure and differ only in
/// lifetime and in the request header they travel on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Access,
    Refresh,
}

impl TokenKind {
    pub fn header(&self) -> &'static str {
        match self {
            Self::Access => ACCESS_KEY,
            Self::Refresh => REFRESH_KEY,
        }
    }

    pub fn lifetime(&self) -> Duration {
        match self {
            Self::Access => Duration::minutes(30),
            Self::Refresh => Duration::hours(24),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// Last refresh token issued to a member, as persisted by the login flow.
#[derive(Debug, Clone)]
pub struct RefreshTokenRecord {
    pub email: String,
    pub token: String,
}
