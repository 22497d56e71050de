use std::sync::Arc;

use async_trait::async_trait;
use surrealdb::Surreal;
use surrealdb::engine::remote::ws::Client;

use crate::domain::models::member::Member;
use crate::domain::repositories::member::MemberRepository;
use crate::domain::repositories::repository::RepositoryResult;
use crate::infrastructure::models::member::SurrealMember;

pub struct MemberRepositoryImpl {
    db: Arc<Surreal<Client>>,
}

impl MemberRepositoryImpl {
    pub fn new(db: Arc<Surreal<Client>>) -> Self {
        Self { db }
    }
}

const MEMBER: &str = "member";

#[async_trait]
impl MemberRepository for MemberRepositoryImpl {
    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<Member>> {
        let member: Option<SurrealMember> = self
            .db
            .query("SELECT * FROM type::table($table) WHERE email = type::string($email)")
            .bind(("table", MEMBER))
            .bind(("email", email.to_owned()))
            .await?
            .take(0)?;

        Ok(member.map(Into::into))
    }
}
