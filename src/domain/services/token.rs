use async_trait::async_trait;

use crate::domain::error::AppResult;
use crate::domain::models::member::{Authentication, MemberRole};
use crate::domain::models::token::{Claims, TokenKind, TokenPair};

#[async_trait]
pub trait TokenService: 'static + Sync + Send {
    /// Issues an access/refresh token pair for the same subject and role.
    fn issue_pair(&self, email: &str, role: MemberRole) -> AppResult<TokenPair>;
    fn issue(&self, email: &str, kind: TokenKind, role: MemberRole) -> AppResult<String>;
    /// Signature and expiration check. Absence of errors is the contract:
    /// every failure mode collapses to `false`.
    fn validate(&self, token: &str) -> bool;
    /// `validate` plus an exact match against the stored refresh record
    /// for the token subject. Guards against replay of rotated tokens.
    async fn validate_refresh(&self, token: &str) -> AppResult<bool>;
    /// Parses a token that is assumed to have been validated already; an
    /// invalid or expired token is a caller error here.
    fn claims(&self, token: &str) -> AppResult<Claims>;
    async fn authentication(&self, email: &str) -> AppResult<Authentication>;
}
