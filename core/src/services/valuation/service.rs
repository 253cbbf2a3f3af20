use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::entities::{DrivingInfo, PriceEstimate};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::PriceRuleRepository;

/// Source of driving distance and duration between two coordinates
#[async_trait]
pub trait DrivingInfoProvider: Send + Sync {
    /// `origin` and `destination` are "longitude,latitude" pairs
    async fn driving_info(&self, origin: &str, destination: &str) -> Result<DrivingInfo, DomainError>;
}

pub struct ValuationService<P, M>
where
    P: PriceRuleRepository + ?Sized,
    M: DrivingInfoProvider + ?Sized,
{
    rules: Arc<P>,
    map: Arc<M>,
}

impl<P, M> ValuationService<P, M>
where
    P: PriceRuleRepository + ?Sized,
    M: DrivingInfoProvider + ?Sized,
{
    pub fn new(rules: Arc<P>, map: Arc<M>) -> Self {
        Self { rules, map }
    }

    pub async fn driving_info(&self, origin: &str, destination: &str) -> DomainResult<DrivingInfo> {
        self.map.driving_info(origin, destination).await
    }

    /// Price a driving route from the map provider's estimate
    pub async fn price_for(
        &self,
        info: &DrivingInfo,
        city_id: u32,
        hour: i32,
    ) -> DomainResult<(i64, i64, i64)> {
        let rule = self
            .rules
            .find_active(city_id, hour)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                resource: format!("price rule for city {} at hour {}", city_id, hour),
            })?;

        let distance_m = parse_quantity("distance", &info.distance)?;
        let duration_s = parse_quantity("duration", &info.duration)?;

        Ok((rule.price_for(distance_m, duration_s), distance_m, duration_s))
    }

    /// Look up the route and price it with the rule active at `hour`
    pub async fn estimate_price(
        &self,
        origin: &str,
        destination: &str,
        city_id: u32,
        hour: i32,
    ) -> DomainResult<PriceEstimate> {
        let info = self.map.driving_info(origin, destination).await?;
        let (price, distance_m, duration_s) = self.price_for(&info, city_id, hour).await?;

        tracing::debug!(
            city_id = city_id,
            hour = hour,
            distance_m = distance_m,
            duration_s = duration_s,
            price = price,
            "Estimated price"
        );

        Ok(PriceEstimate {
            origin: origin.to_string(),
            destination: destination.to_string(),
            price,
            distance_m,
            duration_s,
        })
    }
}

fn parse_quantity(name: &str, value: &str) -> DomainResult<i64> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| DomainError::upstream(format!("map provider returned invalid {}: {:?}", name, value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::PriceRule;
    use crate::repositories::MockPriceRuleRepository;

    struct FixedRoute(DrivingInfo);

    #[async_trait]
    impl DrivingInfoProvider for FixedRoute {
        async fn driving_info(&self, _o: &str, _d: &str) -> Result<DrivingInfo, DomainError> {
            Ok(self.0.clone())
        }
    }

    fn service(distance: &str, duration: &str) -> ValuationService<MockPriceRuleRepository, FixedRoute> {
        let rules = MockPriceRuleRepository::new(vec![
            PriceRule {
                id: 1,
                city_id: 1,
                start_fee: 300,
                distance_fee: 35,
                duration_fee: 10,
                start_at: 7,
                end_at: 23,
            },
            PriceRule {
                id: 2,
                city_id: 1,
                start_fee: 350,
                distance_fee: 40,
                duration_fee: 12,
                start_at: 0,
                end_at: 7,
            },
        ]);
        ValuationService::new(
            Arc::new(rules),
            Arc::new(FixedRoute(DrivingInfo {
                distance: distance.to_string(),
                duration: duration.to_string(),
            })),
        )
    }

    #[tokio::test]
    async fn test_estimate_uses_rule_for_hour() {
        let s = service("12400", "1530");

        let day = s.estimate_price("116.48,39.99", "116.46,39.92", 1, 10).await.unwrap();
        assert_eq!(day.price, 300 + 35 * 7 + 10 * 25);
        assert_eq!(day.distance_m, 12_400);
        assert_eq!(day.origin, "116.48,39.99");

        let night = s.estimate_price("116.48,39.99", "116.46,39.92", 1, 2).await.unwrap();
        assert_eq!(night.price, 350 + 40 * 7 + 12 * 25);
    }

    #[tokio::test]
    async fn test_missing_rule_is_not_found() {
        let s = service("12400", "1530");
        let result = s.estimate_price("a", "b", 9, 10).await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_malformed_route_is_upstream_error() {
        let s = service("12.4km", "1530");
        let result = s.estimate_price("a", "b", 1, 10).await;
        assert!(matches!(result, Err(DomainError::Upstream { .. })));
    }
}
