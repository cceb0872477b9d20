//! User transfer objects.

use serde::{Deserialize, Serialize};

/// A user as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDto {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Body of `POST /user`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUserDto {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Body of `PUT /user/{id}`. The identifier comes from the path.
///
/// Both fields default to empty so merge-mode updates may send only one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateUserDto {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_requires_all_fields() {
        let result: Result<CreateUserDto, _> =
            serde_json::from_str(r#"{"name":"A","email":"a@example.com"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn update_accepts_partial_body() {
        let dto: UpdateUserDto = serde_json::from_str(r#"{"name":"B"}"#).unwrap();
        assert_eq!(dto.name, "B");
        assert!(dto.email.is_empty());
    }
}
