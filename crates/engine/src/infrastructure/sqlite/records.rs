//! Table mappings for the record kinds.

use shelfkeep_domain::{Book, Entity, User};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use super::SqlRecord;

impl SqlRecord for Entity {
    const TABLE: &'static str = "entities";
    const COLUMNS: &'static [&'static str] = &["name"];

    fn values(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }

    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
        })
    }
}

impl SqlRecord for User {
    const TABLE: &'static str = "users";
    const COLUMNS: &'static [&'static str] = &["name", "email"];

    fn values(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str()]
    }

    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            email: row.try_get("email")?,
        })
    }
}

impl SqlRecord for Book {
    const TABLE: &'static str = "books";
    const COLUMNS: &'static [&'static str] = &["title", "author"];

    fn values(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.author.as_str()]
    }

    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            title: row.try_get("title")?,
            author: row.try_get("author")?,
        })
    }
}
