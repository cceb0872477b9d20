//! Entity - the generic named record

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::DomainError;
use crate::record::{keep_unless_empty, Record};

/// A generic record with a single descriptive field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Entity {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
}

impl Entity {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl Record for Entity {
    const KIND: &'static str = "Entity";

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
        }
    }
}
