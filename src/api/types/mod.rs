//! Request and response types shared by the handlers

pub mod error;
pub mod json;
pub mod request_id;

pub use error::ServerMessage;
pub use json::Json;
pub use request_id::RequestId;
