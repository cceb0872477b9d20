//! User entity - a named account with a contact address

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::DomainError;
use crate::record::{keep_unless_empty, Record};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct User {
    #[serde(default)]
    pub id: String,
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
        }
    }
}

impl Record for User {
    const KIND: &'static str = "User";

    fn id(&self) -> &str {
        &self.id
    }

    fn validate(&self) -> Result<(), DomainError> {
        Validate::validate(self).map_err(DomainError::from)
    }

    fn merged_with(&self, incoming: Self) -> Self {
        Self {
            id: self.id.clone(),
            name: keep_unless_empty(&self.name, incoming.name),
            email: keep_unless_empty(&self.email, incoming.email),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_user_passes() {
        let user = User::new("u1", "A", "a@example.com");
        assert_eq!(Record::validate(&user), Ok(()));
    }

    #[test]
    fn malformed_email_is_rejected() {
        let user = User::new("u1", "A", "a-at-example.com");
        let err = Record::validate(&user).unwrap_err();
        assert!(err.to_string().contains("email must be a valid address"));
    }

    #[test]
    fn empty_email_is_rejected() {
        let user = User::new("u1", "A", "");
        assert!(Record::validate(&user).is_err());
    }

    #[test]
    fn merge_keeps_identifier_and_blank_fields() {
        let current = User::new("u1", "A", "a@example.com");
        let merged = current.merged_with(User::new("other", "", "b@example.com"));
        assert_eq!(merged, User::new("u1", "A", "b@example.com"));
    }
}
