//! # LaomaDJ Core
//!
//! Domain layer of the LaomaDJ ride-hailing backend: customer and driver
//! identities, verification codes, session credentials, and fare valuation.
//! Storage and upstream services are reached through the repository and
//! service traits defined here and implemented in `dj_infra`.

pub mod domain;
pub mod services;
pub mod repositories;
pub mod errors;

// Re-export commonly used types for convenience
pub use domain::entities::{
    CodeType, Customer, CustomerId, Driver, DriverStatus, Identity, IdentityDomain, PriceRule,
    SessionClaims, Telephone,
};
pub use errors::{AuthError, DomainError, DomainResult, ErrorKind, TokenError};
pub use repositories::{IdentityRepository, MockIdentityRepository, PriceRuleRepository};
pub use services::{
    AuthService, AuthServiceConfig, CodeDelivery, CodeSource, CodeStore, InlineDelivery,
    LocalCodeSource, MemoryCodeStore, SessionConfig, SessionValidator, ValuationService,
};
