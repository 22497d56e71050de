pub mod bookmark;
pub mod member;
pub mod token;
