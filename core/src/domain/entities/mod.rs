//! Domain entities representing core business objects.

pub mod customer;
pub mod driver;
pub mod identity;
pub mod price_rule;
pub mod session;
pub mod verification_code;

// Re-export commonly used types
pub use customer::{Customer, CustomerId};
pub use driver::{Driver, DriverStatus, Telephone};
pub use identity::{Identity, IdentityDomain, IdentityKey, KeyParseError};
pub use price_rule::{DrivingInfo, PriceEstimate, PriceRule, START_DISTANCE_KM};
pub use session::{IssuedSession, SessionClaims};
pub use verification_code::{CodeType, IssuedCode};
