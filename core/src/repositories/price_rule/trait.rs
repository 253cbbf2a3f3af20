//! Fare rule lookup

use async_trait::async_trait;

use crate::domain::entities::PriceRule;
use crate::errors::DomainError;

#[async_trait]
pub trait PriceRuleRepository: Send + Sync {
    /// Rule of a city whose hour window contains `hour`
    async fn find_active(&self, city_id: u32, hour: i32) -> Result<Option<PriceRule>, DomainError>;
}
