use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub struct Member {
    pub id: String,
    pub email: String,
    pub role: MemberRole,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MemberRole {
    Member,
    Admin,
}

/// Authentication context built for a token subject after validation.
#[derive(Debug, Clone)]
pub struct Authentication {
    pub member: Member,
    pub authorities: Vec<MemberRole>,
}
