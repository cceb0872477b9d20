//! Record capability and identifier policy.
//!
//! A [`Record`] is anything the stores can persist under a string key.
//! Use cases are written once against this trait and instantiated per kind.

use std::fmt::Debug;

use uuid::{Uuid, Version};

use crate::error::DomainError;

/// A persisted value identified by a unique string key.
pub trait Record: Clone + Debug + PartialEq + Send + Sync + 'static {
    /// Kind name used in error messages and log fields.
    const KIND: &'static str;

    fn id(&self) -> &str;

    /// Structural validation of the non-identifier fields.
    fn validate(&self) -> Result<(), DomainError>;

    /// Inactive records are hidden from lookups.
    fn is_active(&self) -> bool {
        true
    }

    fn can_be_deleted(&self) -> bool {
        true
    }

    /// Field-wise merge: every non-empty field of `incoming` wins,
    /// everything else (including the identifier) is kept from `self`.
    fn merged_with(&self, incoming: Self) -> Self;
}

/// Shape an identifier must have before any store is consulted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IdPolicy {
    /// Any identifier with at least one non-whitespace character.
    #[default]
    NonEmpty,
    /// A hyphenated or simple UUID whose version nibble is 4.
    Uuid4,
}

impl IdPolicy {
    pub fn check(self, id: &str) -> Result<(), DomainError> {
        if id.trim().is_empty() {
            return Err(DomainError::invalid_id("id is required"));
        }
        match self {
            IdPolicy::NonEmpty => Ok(()),
            IdPolicy::Uuid4 => {
                let parsed = Uuid::parse_str(id)
                    .map_err(|_| DomainError::invalid_id(format!("'{id}' is not a UUID")))?;
                if parsed.get_version() != Some(Version::Random) {
                    return Err(DomainError::invalid_id(format!(
                        "'{id}' is not a version 4 UUID"
                    )));
                }
                Ok(())
            }
        }
    }
}

/// Picks `incoming` unless it is empty, for [`Record::merged_with`] impls.
pub(crate) fn keep_unless_empty(current: &str, incoming: String) -> String {
    if incoming.is_empty() {
        current.to_string()
    } else {
        incoming
    }
}
