pub mod bookmark;
pub mod member;
pub mod refresh_token;
pub mod repository;
