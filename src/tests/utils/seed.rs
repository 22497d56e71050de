use crate::domain::models::member::{Member, MemberRole};
use ::surrealdb::{Surreal, engine::remote::ws::Client, sql::Thing};

pub async fn seed_member(conn: &Surreal<Client>) -> Member {
    let query = format!(
        r#"
        LET $member = (CREATE member CONTENT {{
            email: '{}',
            role: '{}'
        }});
        RETURN $member[0].id;
        "#,
        "test_member@email.com", "MEMBER"
    );

    let thing: Option<Thing> = conn.query(query).await.unwrap().take(1).unwrap();

    Member {
        id: thing.unwrap().id.to_string(),
        email: "test_member@email.com".to_string(),
        role: MemberRole::Member,
    }
}

pub async fn seed_refresh_token(conn: &Surreal<Client>, email: &str, token: &str) {
    conn.query(format!(
        "CREATE refresh_token CONTENT {{ email: '{email}', token: '{token}' }}"
    ))
    .await
    .unwrap();
}
