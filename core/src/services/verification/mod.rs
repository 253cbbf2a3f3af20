//! Verification code issuance and checking
//!
//! This module provides the one-time code workflow shared by both identity
//! domains:
//! - Code issuance through a pluggable [`CodeSource`]
//! - Storage in an ephemeral [`CodeStore`] with a TTL, latest issuance wins
//! - Hand-off to a pluggable [`CodeDelivery`] channel
//! - Checking a presented code against the stored one

mod config;
mod delivery;
mod memory;
mod service;
mod traits;

#[cfg(test)]
mod tests;

pub use config::VerificationServiceConfig;
pub use delivery::InlineDelivery;
pub use memory::MemoryCodeStore;
pub use service::VerificationService;
pub use traits::{CodeDelivery, CodeSource, CodeStore, DeliveryOutcome};
