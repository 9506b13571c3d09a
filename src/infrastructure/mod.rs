//! Infrastructure layer - Storage, services and process setup

pub mod logging;
pub mod user;
