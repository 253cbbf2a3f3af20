//! MySQL implementation of the price rule repository.

use async_trait::async_trait;
use sqlx::MySqlPool;

use dj_core::domain::entities::PriceRule;
use dj_core::errors::DomainError;
use dj_core::repositories::PriceRuleRepository;

use super::{column, query_failed};

/// Reads table `price_rules`
pub struct MySqlPriceRuleRepository {
    pool: MySqlPool,
}

impl MySqlPriceRuleRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PriceRuleRepository for MySqlPriceRuleRepository {
    async fn find_active(&self, city_id: u32, hour: i32) -> Result<Option<PriceRule>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, city_id, start_fee, distance_fee, duration_fee, start_at, end_at
            FROM price_rules
            WHERE city_id = ? AND start_at <= ? AND end_at > ? AND deleted_at IS NULL
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(city_id)
        .bind(hour)
        .bind(hour)
        .fetch_optional(&self.pool)
        .await
        .map_err(query_failed)?;

        row.map(|row| {
            Ok(PriceRule {
                id: column(&row, "id")?,
                city_id: column(&row, "city_id")?,
                start_fee: column(&row, "start_fee")?,
                distance_fee: column(&row, "distance_fee")?,
                duration_fee: column(&row, "duration_fee")?,
                start_at: column(&row, "start_at")?,
                end_at: column(&row, "end_at")?,
            })
        })
        .transpose()
    }
}
