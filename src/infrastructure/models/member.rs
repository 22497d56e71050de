use serde::Deserialize;
use surrealdb::sql::Thing;

use crate::domain::models::member::{Member, MemberRole};

#[derive(Debug, Deserialize)]
pub struct SurrealMember {
    id: Thing,
    email: String,
    role: MemberRole,
}

impl From<SurrealMember> for Member {
    fn from(member: SurrealMember) -> Self {
        Member {
            id: member.id.id.to_string(),
            email: member.email,
            role: member.role,
        }
    }
}
