//! Fare rules and driving estimates.

use serde::{Deserialize, Serialize};

/// Distance covered by the start fee, in kilometres
pub const START_DISTANCE_KM: i64 = 5;

/// Fare rule for a city and a time-of-day window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRule {
    pub id: u64,

    pub city_id: u32,

    /// Flat fee covering the first kilometres
    pub start_fee: i64,

    /// Fee per kilometre beyond the start distance
    pub distance_fee: i64,

    /// Fee per minute of driving
    pub duration_fee: i64,

    /// First hour of the window, inclusive
    pub start_at: i32,

    /// Last hour of the window, exclusive
    pub end_at: i32,
}

impl PriceRule {
    pub fn covers_hour(&self, hour: i32) -> bool {
        self.start_at <= hour && hour < self.end_at
    }

    /// Price for a trip given in metres and seconds.
    ///
    /// Trips shorter than the start distance pay the start fee plus time.
    pub fn price_for(&self, distance_m: i64, duration_s: i64) -> i64 {
        let km = distance_m / 1000;
        let minutes = duration_s / 60;
        let extra_km = (km - START_DISTANCE_KM).max(0);
        self.start_fee + self.distance_fee * extra_km + self.duration_fee * minutes
    }
}

/// Distance and duration reported by the map provider, as decimal strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrivingInfo {
    /// Metres
    pub distance: String,
    /// Seconds
    pub duration: String,
}

/// Fare estimate for a trip
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceEstimate {
    pub origin: String,
    pub destination: String,
    pub price: i64,
    pub distance_m: i64,
    pub duration_s: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule() -> PriceRule {
        PriceRule {
            id: 1,
            city_id: 1,
            start_fee: 300,
            distance_fee: 35,
            duration_fee: 10,
            start_at: 7,
            end_at: 23,
        }
    }

    #[test]
    fn test_price_beyond_start_distance() {
        // 12.4 km -> 7 km beyond start, 25.5 min -> 25 min
        assert_eq!(rule().price_for(12_400, 1_530), 300 + 35 * 7 + 10 * 25);
    }

    #[test]
    fn test_short_trip_pays_start_fee_and_time() {
        assert_eq!(rule().price_for(2_000, 600), 300 + 10 * 10);
    }

    #[test]
    fn test_covers_hour_window() {
        let r = rule();
        assert!(r.covers_hour(7));
        assert!(r.covers_hour(22));
        assert!(!r.covers_hour(23));
        assert!(!r.covers_hour(3));
    }
}
