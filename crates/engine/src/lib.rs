//! Shelfkeep Engine library.
//!
//! Layered CRUD service for entities, users and books.
//!
//! ## Structure
//!
//! - `infrastructure/` - Store port plus in-memory and SQLite adapters
//! - `repositories/` - Domain services wrapping the store port
//! - `use_cases/` - Identifier, validation and existence rules
//! - `application/` - Permission gate, DTO mapping, request logging
//! - `api/` - HTTP entry points
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod application;
pub mod config;
pub mod infrastructure;
pub mod repositories;
pub mod use_cases;

pub use app::App;
pub use config::{ConfigError, ServerConfig};
