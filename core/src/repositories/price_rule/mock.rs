//! In-memory fare rules for tests and local runs

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::PriceRule;
use crate::errors::DomainError;

use super::trait_::PriceRuleRepository;

#[derive(Default)]
pub struct MockPriceRuleRepository {
    rules: RwLock<Vec<PriceRule>>,
}

impl MockPriceRuleRepository {
    pub fn new(rules: Vec<PriceRule>) -> Self {
        Self {
            rules: RwLock::new(rules),
        }
    }
}

#[async_trait]
impl PriceRuleRepository for MockPriceRuleRepository {
    async fn find_active(&self, city_id: u32, hour: i32) -> Result<Option<PriceRule>, DomainError> {
        let rules = self.rules.read().await;
        Ok(rules
            .iter()
            .find(|r| r.city_id == city_id && r.covers_hour(hour))
            .cloned())
    }
}
