//! Login orchestration for one identity domain
//!
//! Combines code verification, identity resolution, and session issuance
//! into the send-code, login, logout, and phone-submission flows.

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::AuthServiceConfig;
pub use service::{AuthService, LoginOutcome};
