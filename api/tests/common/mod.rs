//! In-memory application fixture for the HTTP tests

use actix_web::{body::MessageBody, dev::ServiceResponse, test, web};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

use dj_api::state::{
    AppState, CustomerAuthService, CustomerRepository, DriverAuthService, DriverRepository,
    DynCodeDelivery, DynCodeSource, DynCodeStore, DynValuationService,
};
use dj_core::domain::entities::{Customer, Driver, DrivingInfo, PriceRule};
use dj_core::errors::DomainError;
use dj_core::repositories::{MockIdentityRepository, MockPriceRuleRepository, PriceRuleRepository};
use dj_core::services::auth::{AuthService, AuthServiceConfig};
use dj_core::services::code::LocalCodeSource;
use dj_core::services::valuation::{DrivingInfoProvider, ValuationService};
use dj_core::services::verification::{InlineDelivery, MemoryCodeStore};

pub const CUSTOMER_PHONE: &str = "13800138000";
pub const DRIVER_PHONE: &str = "13900139000";
pub const ORIGIN: &str = "116.481028,39.989643";
pub const DESTINATION: &str = "116.434446,39.90816";

/// 12 km in 20 minutes
pub struct FixedRoute;

#[async_trait]
impl DrivingInfoProvider for FixedRoute {
    async fn driving_info(&self, _origin: &str, _destination: &str) -> Result<DrivingInfo, DomainError> {
        Ok(DrivingInfo {
            distance: "12000".to_string(),
            duration: "1200".to_string(),
        })
    }
}

/// Fare for [`FixedRoute`] under the all-day rule: 300 + 35 * 7 + 10 * 20
pub const FIXED_ROUTE_PRICE: i64 = 745;

pub struct Harness {
    pub state: web::Data<AppState>,
    pub customers: Arc<MockIdentityRepository<Customer>>,
    pub drivers: Arc<MockIdentityRepository<Driver>>,
}

pub fn harness() -> Harness {
    let customers = Arc::new(MockIdentityRepository::<Customer>::new());
    let drivers = Arc::new(MockIdentityRepository::<Driver>::new());
    let customer_repo: Arc<CustomerRepository> = customers.clone();
    let driver_repo: Arc<DriverRepository> = drivers.clone();
    let source: Arc<DynCodeSource> = Arc::new(LocalCodeSource);
    let store: Arc<DynCodeStore> = Arc::new(MemoryCodeStore::new());
    let delivery: Arc<DynCodeDelivery> = Arc::new(InlineDelivery);

    let customer: CustomerAuthService = AuthService::new(
        customer_repo,
        source.clone(),
        store.clone(),
        delivery.clone(),
        AuthServiceConfig::customer(),
    );
    let driver: DriverAuthService = AuthService::new(
        driver_repo,
        source,
        store,
        delivery,
        AuthServiceConfig::driver(),
    );

    let rules: Arc<dyn PriceRuleRepository> = Arc::new(MockPriceRuleRepository::new(vec![PriceRule {
        id: 1,
        city_id: 1,
        start_fee: 300,
        distance_fee: 35,
        duration_fee: 10,
        start_at: 0,
        end_at: 24,
    }]));
    let map: Arc<dyn DrivingInfoProvider> = Arc::new(FixedRoute);
    let valuation: DynValuationService = ValuationService::new(rules, map);

    let state = web::Data::new(AppState {
        customer: Arc::new(customer),
        driver: Arc::new(driver),
        valuation: Arc::new(valuation),
        request_timeout: Duration::from_secs(5),
        default_city_id: 1,
    });

    Harness {
        state,
        customers,
        drivers,
    }
}

pub async fn json_body<B: MessageBody>(resp: ServiceResponse<B>) -> serde_json::Value {
    test::read_body_json(resp).await
}

pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token))
}
