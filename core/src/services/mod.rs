//! Business services containing domain logic and use cases.

pub mod auth;
pub mod code;
pub mod identity;
pub mod session;
pub mod valuation;
pub mod verification;

// Re-export commonly used types
pub use auth::{AuthService, AuthServiceConfig, LoginOutcome};
pub use code::{generate_code, LocalCodeSource};
pub use identity::IdentityResolver;
pub use session::{SessionConfig, SessionIssuer, SessionRevoker, SessionValidator};
pub use valuation::{DrivingInfoProvider, ValuationService};
pub use verification::{
    CodeDelivery, CodeSource, CodeStore, DeliveryOutcome, InlineDelivery, MemoryCodeStore,
    VerificationService, VerificationServiceConfig,
};
