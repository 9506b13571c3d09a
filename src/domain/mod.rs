//! Domain layer - Core business logic and entities

pub mod common;
pub mod error;
pub mod user;

pub use error::{AppError, DomainError, ErrorParams};
pub use user::{User, UserAuth, UserPatch, UserRepository};
