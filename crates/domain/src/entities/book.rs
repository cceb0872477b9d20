//! Book entity - a catalogued title

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::DomainError;
use crate::record::{keep_unless_empty, Record};

/// A book in the catalogue.
///
/// Whether `id` must be a UUID v4 is decided by the use case's
/// [`IdPolicy`](crate::IdPolicy), not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Book {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "author is required"))]
    pub author: String,
}

impl Book {
    pub fn new(id: impl Into<String>, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
        }
    }
}

impl Record for Book {
    const KIND: &'static str = "Book";

    fn id(&self) -> &str {
        &self.id
    }

    fn validate(&self) -> Result<(), DomainError> {
        Validate::validate(self).map_err(DomainError::from)
    }

    fn merged_with(&self, incoming: Self) -> Self {
        Self {
            id: self.id.clone(),
            title: keep_unless_empty(&self.title, incoming.title),
            author: keep_unless_empty(&self.author, incoming.author),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_title_and_author_are_both_reported() {
        let err = Record::validate(&Book::new("1", "", "")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation failed: author: author is required; title: title is required"
        );
    }

    #[test]
    fn serializes_with_plain_field_names() {
        let json = serde_json::to_value(Book::new("1", "Test Book", "Test Author")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": "1", "title": "Test Book", "author": "Test Author"})
        );
    }

    #[test]
    fn absent_fields_decode_as_empty_and_fail_validation() {
        let book: Book = serde_json::from_str(r#"{"title":"New"}"#).unwrap();
        assert_eq!(book, Book::new("", "New", ""));
        assert!(Record::validate(&book).is_err());
    }
}
