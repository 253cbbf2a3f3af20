pub mod identity;
pub mod price_rule;

pub use identity::{IdentityRepository, MockIdentityRepository};
pub use price_rule::{MockPriceRuleRepository, PriceRuleRepository};
