use actix_web::{web, HttpServer};
use anyhow::Context;
use std::sync::Arc;
use std::time::Duration;

use dj_api::create_app;
use dj_api::state::{
    AppState, CustomerAuthService, CustomerRepository, DriverAuthService, DriverRepository,
    DynCodeDelivery, DynCodeSource, DynCodeStore, DynValuationService,
};
use dj_api::telemetry::init_tracing;
use dj_core::services::auth::{AuthService, AuthServiceConfig};
use dj_core::services::code::LocalCodeSource;
use dj_core::repositories::PriceRuleRepository;
use dj_core::services::valuation::{DrivingInfoProvider, ValuationService};
use dj_core::services::verification::InlineDelivery;
use dj_infra::cache::{RedisClient, RedisCodeStore};
use dj_infra::database::{
    DatabasePool, MySqlCustomerRepository, MySqlDriverRepository, MySqlPriceRuleRepository,
};
use dj_infra::load_config;
use dj_infra::services::{http_client, AmapDrivingClient, HttpCodeSource, SmsGatewayDelivery};
use dj_shared::DeliveryMode;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = load_config().context("failed to load configuration")?;
    init_tracing(&config.logging)?;

    tracing::info!(
        environment = ?config.environment,
        "Starting LaomaDJ API server"
    );

    // Storage
    let db = DatabasePool::new(&config.database)
        .await
        .context("failed to connect to MySQL")?;
    match db.health_check().await {
        Ok(true) => tracing::info!(pool = %db.get_statistics(), "MySQL health check passed"),
        Ok(false) => tracing::warn!("MySQL health check returned an unexpected reply"),
        Err(e) => tracing::warn!(error = %e, "MySQL health check failed"),
    }
    let redis = RedisClient::new(&config.cache)
        .await
        .context("failed to connect to Redis")?;
    match redis.health_check().await {
        Ok(true) => tracing::info!("Redis health check passed"),
        Ok(false) => tracing::warn!("Redis health check returned an unexpected reply"),
        Err(e) => tracing::warn!(error = %e, "Redis health check failed"),
    }

    let pool = db.get_pool().clone();
    let customers: Arc<CustomerRepository> = Arc::new(MySqlCustomerRepository::new(pool.clone()));
    let drivers: Arc<DriverRepository> = Arc::new(MySqlDriverRepository::new(pool.clone()));
    let price_rules: Arc<dyn PriceRuleRepository> = Arc::new(MySqlPriceRuleRepository::new(pool));

    // Code issuance and delivery
    let http = http_client(Duration::from_secs(config.upstream.http_timeout))?;
    let source: Arc<DynCodeSource> = match &config.upstream.code_service_url {
        Some(url) => {
            tracing::info!(url = %url, "Using remote code service");
            Arc::new(HttpCodeSource::new(http.clone(), url))
        }
        None => Arc::new(LocalCodeSource),
    };
    let store: Arc<DynCodeStore> = Arc::new(RedisCodeStore::new(redis));
    let delivery: Arc<DynCodeDelivery> = match config.verification.delivery {
        DeliveryMode::Response => Arc::new(InlineDelivery),
        DeliveryMode::SmsGateway => {
            let url = config
                .verification
                .sms_gateway_url
                .clone()
                .context("sms_gateway delivery requires verification.sms_gateway_url")?;
            Arc::new(SmsGatewayDelivery::new(http.clone(), url))
        }
    };

    let customer: CustomerAuthService = AuthService::new(
        customers,
        source.clone(),
        store.clone(),
        delivery.clone(),
        AuthServiceConfig::from_parts(&config.verification.customer, &config.auth.customer),
    );
    let driver: DriverAuthService = AuthService::new(
        drivers,
        source,
        store,
        delivery,
        AuthServiceConfig::from_parts(&config.verification.driver, &config.auth.driver),
    );
    let map: Arc<dyn DrivingInfoProvider> =
        Arc::new(AmapDrivingClient::new(http, config.upstream.map.clone()));
    let valuation: DynValuationService = ValuationService::new(price_rules, map);

    let state = web::Data::new(AppState {
        customer: Arc::new(customer),
        driver: Arc::new(driver),
        valuation: Arc::new(valuation),
        request_timeout: config.server.request_deadline(),
        default_city_id: config.upstream.default_city_id,
    });

    let bind_address = config.server.bind_address();
    tracing::info!(address = %bind_address, workers = config.server.workers, "Server will bind");

    let cors = config.cors.clone();
    let mut server = HttpServer::new(move || create_app(state.clone(), &cors));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }
    server
        .keep_alive(Duration::from_secs(config.server.keep_alive))
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await?;

    db.close().await;
    tracing::info!("Server stopped");
    Ok(())
}
