use std::sync::Arc;

use surrealdb::Surreal;
use surrealdb::engine::remote::ws::Client;

use crate::domain::repositories::bookmark::BookmarkRepository;
use crate::domain::repositories::member::MemberRepository;
use crate::domain::repositories::refresh_token::RefreshTokenRepository;
use crate::domain::services::bookmark::BookmarkService;
use crate::domain::services::token::TokenService;

use crate::services::bookmark::BookmarkServiceImpl;
use crate::services::token::{SigningKey, TokenServiceImpl};

use crate::infrastructure::repositories::bookmark::BookmarkRepositoryImpl;
use crate::infrastructure::repositories::member::MemberRepositoryImpl;
use crate::infrastructure::repositories::refresh_token::RefreshTokenRepositoryImpl;

pub struct Container {
    pub bookmark_service: Arc<dyn BookmarkService>,
    pub token_service: Arc<dyn TokenService>,
}

impl Container {
    pub fn new(conn: Surreal<Client>, key: SigningKey) -> Self {
        let db = Arc::new(conn);

        Container {
            bookmark_service: bookmark_service(db.clone()),
            token_service: token_service(db, key),
        }
    }
}

fn bookmark_service(db: Arc<Surreal<Client>>) -> Arc<dyn BookmarkService> {
    let bookmark_repository: Arc<dyn BookmarkRepository> =
        Arc::new(BookmarkRepositoryImpl::new(db));

    Arc::new(BookmarkServiceImpl::new(bookmark_repository))
}

fn token_service(db: Arc<Surreal<Client>>, key: SigningKey) -> Arc<dyn TokenService> {
    let refresh_tokens: Arc<dyn RefreshTokenRepository> =
        Arc::new(RefreshTokenRepositoryImpl::new(db.clone()));

    let members: Arc<dyn MemberRepository> = Arc::new(MemberRepositoryImpl::new(db));

    Arc::new(TokenServiceImpl::new(key, refresh_tokens, members))
}
