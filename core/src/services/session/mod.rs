//! Session credential lifecycle
//!
//! - [`SessionIssuer`] mints a signed credential and persists it as the
//!   identity's single authoritative credential
//! - [`SessionValidator`] admits a presented credential only if it is
//!   byte-for-byte the persisted one
//! - [`SessionRevoker`] clears the persisted credential

mod config;
mod issuer;
mod revoker;
mod validator;

#[cfg(test)]
mod tests;

pub use config::SessionConfig;
pub use issuer::SessionIssuer;
pub use revoker::SessionRevoker;
pub use validator::SessionValidator;
