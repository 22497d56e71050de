use std::sync::Arc;

use crate::domain::error::{AppError, AppResult};
use crate::domain::models::member::{Authentication, MemberRole};
use crate::domain::models::token::{BEARER_PREFIX, Claims, TokenKind, TokenPair};
use crate::domain::repositories::member::MemberRepository;
use crate::domain::repositories::refresh_token::RefreshTokenRepository;
use crate::domain::services::token::TokenService;

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use tracing::info;

/// HS256 key material, derived once at startup and immutable afterwards.
#[derive(Clone)]
pub struct SigningKey {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl SigningKey {
    pub fn from_base64_secret(secret: &str) -> Result<Self, base64::DecodeError> {
        let bytes = BASE64.decode(secret)?;

        Ok(SigningKey {
            encoding: EncodingKey::from_secret(&bytes),
            decoding: DecodingKey::from_secret(&bytes),
        })
    }
}

/// Outcome of parsing and verifying a token. Collapses to a boolean at the
/// `TokenService::validate` boundary.
#[derive(Debug)]
enum TokenVerdict {
    Valid(Claims),
    Expired,
    InvalidSignature,
    Malformed,
    Unsupported,
    EmptyClaims,
}

pub struct TokenServiceImpl {
    key: SigningKey,
    refresh_tokens: Arc<dyn RefreshTokenRepository>,
    members: Arc<dyn MemberRepository>,
}

impl TokenServiceImpl {
    pub fn new(
        key: SigningKey,
        refresh_tokens: Arc<dyn RefreshTokenRepository>,
        members: Arc<dyn MemberRepository>,
    ) -> Self {
        TokenServiceImpl {
            key,
            refresh_tokens,
            members,
        }
    }

    fn verify(&self, token: &str) -> TokenVerdict {
        match decode::<Claims>(
            token,
            &self.key.decoding,
            &Validation::new(Algorithm::HS256),
        ) {
            Ok(data) => TokenVerdict::Valid(data.claims),
            Err(error) => match error.kind() {
                ErrorKind::InvalidSignature => TokenVerdict::InvalidSignature,
                ErrorKind::ExpiredSignature => TokenVerdict::Expired,
                ErrorKind::InvalidAlgorithm | ErrorKind::InvalidAlgorithmName => {
                    TokenVerdict::Unsupported
                }
                ErrorKind::InvalidToken | ErrorKind::Base64(_) | ErrorKind::Utf8(_) => {
                    TokenVerdict::Malformed
                }
                _ => TokenVerdict::EmptyClaims,
            },
        }
    }
}

#[async_trait]
impl TokenService for TokenServiceImpl {
    fn issue_pair(&self, email: &str, role: MemberRole) -> AppResult<TokenPair> {
        Ok(TokenPair {
            access: self.issue(email, TokenKind::Access, role)?,
            refresh: self.issue(email, TokenKind::Refresh, role)?,
        })
    }

    fn issue(&self, email: &str, kind: TokenKind, role: MemberRole) -> AppResult<String> {
        let now = Utc::now();

        let expiration = now.checked_add_signed(kind.lifetime()).unwrap().timestamp();

        let claims = Claims {
            sub: email.to_string(),
            role,
            exp: expiration,
            iat: now.timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.key.encoding)
            .map_err(|err| AppError::InternalError().trace(&err.to_string()))?;

        Ok(format!("{BEARER_PREFIX}{token}"))
    }

    fn validate(&self, token: &str) -> bool {
        match self.verify(token) {
            TokenVerdict::Valid(_) => true,
            TokenVerdict::InvalidSignature | TokenVerdict::Malformed => {
                info!("Invalid JWT signature, 유효하지 않는 JWT 서명 입니다");
                false
            }
            TokenVerdict::Expired => {
                info!("Expired JWT token, 만료된 JWT token 입니다");
                false
            }
            TokenVerdict::Unsupported => {
                info!("Unsupported JWT token, 지원되지 않는 JWT 토큰 입니다");
                false
            }
            TokenVerdict::EmptyClaims => {
                info!("JWT claims is empty, 잘못된 JWT 토큰 입니다");
                false
            }
        }
    }

    async fn validate_refresh(&self, token: &str) -> AppResult<bool> {
        if !self.validate(token) {
            return Ok(false);
        }

        let claims = self.claims(token)?;

        let record = self.refresh_tokens.find_by_email(&claims.sub).await?;

        Ok(record.is_some_and(|record| record.token == token))
    }

    fn claims(&self, token: &str) -> AppResult<Claims> {
        match self.verify(token) {
            TokenVerdict::Valid(claims) => Ok(claims),
            verdict => Err(AppError::Unauthorized().trace(&format!("{verdict:?}"))),
        }
    }

    async fn authentication(&self, email: &str) -> AppResult<Authentication> {
        let member = match self.members.find_by_email(email).await? {
            Some(member) => member,
            None => return Err(AppError::Unauthorized()),
        };

        Ok(Authentication {
            authorities: vec![member.role],
            member,
        })
    }
}
