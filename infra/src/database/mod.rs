//! Database module - MySQL implementations using SQLx
//!
//! - Connection pool management
//! - Customer, driver, and price rule repositories

pub mod connection;
pub mod mysql;

// Re-export commonly used types
pub use connection::{DatabasePool, PoolStatistics};
pub use mysql::{MySqlCustomerRepository, MySqlDriverRepository, MySqlPriceRuleRepository};
