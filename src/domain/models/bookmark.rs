#[derive(Debug, Clone)]
pub struct Bookmark {
    pub id: String,
    pub store_id: i64,
    pub user_id: i64,
    pub member_email: String,
}

#[derive(Clone)]
pub struct CreateBookmark {
    pub store_id: i64,
    pub user_id: i64,
    pub member_email: String,
}
