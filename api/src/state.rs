//! Shared application state
//!
//! Services are held behind trait objects so the binary can plug in Redis,
//! MySQL, and HTTP collaborators while tests use the in-memory ones.

use std::sync::Arc;
use std::time::Duration;

use dj_core::domain::entities::{Customer, Driver};
use dj_core::repositories::{IdentityRepository, PriceRuleRepository};
use dj_core::services::auth::AuthService;
use dj_core::services::session::SessionValidator;
use dj_core::services::valuation::{DrivingInfoProvider, ValuationService};
use dj_core::services::verification::{CodeDelivery, CodeSource, CodeStore};

pub type DynCodeSource = dyn CodeSource;
pub type DynCodeStore = dyn CodeStore;
pub type DynCodeDelivery = dyn CodeDelivery;

pub type CustomerRepository = dyn IdentityRepository<Customer>;
pub type DriverRepository = dyn IdentityRepository<Driver>;

pub type CustomerAuthService =
    AuthService<Customer, CustomerRepository, DynCodeSource, DynCodeStore, DynCodeDelivery>;
pub type DriverAuthService =
    AuthService<Driver, DriverRepository, DynCodeSource, DynCodeStore, DynCodeDelivery>;

pub type CustomerSessionValidator = SessionValidator<Customer, CustomerRepository>;
pub type DriverSessionValidator = SessionValidator<Driver, DriverRepository>;

pub type DynValuationService = ValuationService<dyn PriceRuleRepository, dyn DrivingInfoProvider>;

/// Services and settings shared by every worker
pub struct AppState {
    pub customer: Arc<CustomerAuthService>,
    pub driver: Arc<DriverAuthService>,
    pub valuation: Arc<DynValuationService>,
    /// Per-request deadline for storage and peer calls
    pub request_timeout: Duration,
    /// City whose price rules apply to customer estimates
    pub default_city_id: u32,
}

impl AppState {
    pub fn customer_validator(&self) -> Arc<CustomerSessionValidator> {
        Arc::new(self.customer.session_validator())
    }

    pub fn driver_validator(&self) -> Arc<DriverSessionValidator> {
        Arc::new(self.driver.session_validator())
    }
}
