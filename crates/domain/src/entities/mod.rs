//! Persisted record kinds.

mod book;
mod entity;
mod user;

pub use book::Book;
pub use entity::Entity;
pub use user::User;
