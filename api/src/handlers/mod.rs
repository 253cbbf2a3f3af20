//! Request handling helpers shared by the route modules

pub mod deadline;
pub mod error;
pub mod health;

pub use deadline::with_deadline;
pub use error::{json_error_handler, request_language, ApiError, PeerError};
