//! Shelfkeep wire contract.
//!
//! Transfer objects exchanged over HTTP. These are deliberately separate from
//! the domain records so the persisted shape can change without breaking
//! clients.
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - only serde
//! 2. **No business logic** - pure data types and serialization

pub mod dto;
pub mod responses;

pub use dto::{CreateUserDto, UpdateUserDto, UserDto};
pub use responses::{ErrorResponse, StatusResponse};
