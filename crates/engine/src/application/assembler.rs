//! Mapping between user transfer objects and the `User` record.

use shelfkeep_domain::User;
use shelfkeep_shared::{CreateUserDto, UpdateUserDto, UserDto};

pub struct UserAssembler;

impl UserAssembler {
    pub fn to_dto(user: User) -> UserDto {
        UserDto {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }

    pub fn from_create(dto: CreateUserDto) -> User {
        User::new(dto.id, dto.name, normalize_email(&dto.email))
    }

    /// The identifier always comes from the request path.
    pub fn from_update(id: &str, dto: UpdateUserDto) -> User {
        User::new(id, dto.name, normalize_email(&dto.email))
    }
}

/// Emails compare case-insensitively; store them trimmed and lower-cased.
fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
