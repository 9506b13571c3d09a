//! User infrastructure module
//!
//! In-memory user storage and the service driving registration and
//! profile updates.

mod repository;
mod service;

pub use repository::InMemoryUserRepository;
pub use service::UserService;
