use rateplan_shared::{clamp, DemandContext};

use crate::DemandForecaster;

const OCCUPANCY_WEIGHT: f64 = 0.4;
const TIME_WEIGHT: f64 = 0.4;
const COMPETITOR_WEIGHT: f64 = 0.2;

const BASELINE_COMPETITOR_FACTOR: f64 = 0.5;
const KNOWN_COMPETITOR_FACTOR: f64 = 0.7;

const HIGH_OCCUPANCY_THRESHOLD: f64 = 0.7;
const HIGH_OCCUPANCY_BOOST: f64 = 0.2;

const DAYS_PER_YEAR: f64 = 365.0;

/// Weighted blend of occupancy, proximity to check-in and competitor
/// presence, with an extra bump once the hotel is filling up.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicForecaster;

impl HeuristicForecaster {
    pub fn new() -> Self {
        Self
    }
}

impl DemandForecaster for HeuristicForecaster {
    fn name(&self) -> &str {
        "HeuristicForecaster"
    }

    fn forecast(&self, ctx: &DemandContext) -> f64 {
        let occ_factor = clamp(ctx.current_occupancy, 0.0, 1.0);

        // closer to check-in => higher
        let time_factor = 1.0 - clamp(ctx.booking_window_days as f64 / DAYS_PER_YEAR, 0.0, 1.0);

        let competitor_factor = match ctx.competitor_price {
            Some(price) if price > 0.0 => KNOWN_COMPETITOR_FACTOR,
            _ => BASELINE_COMPETITOR_FACTOR,
        };

        let mut raw = OCCUPANCY_WEIGHT * occ_factor
            + TIME_WEIGHT * time_factor
            + COMPETITOR_WEIGHT * competitor_factor;

        if occ_factor > HIGH_OCCUPANCY_THRESHOLD {
            raw += HIGH_OCCUPANCY_BOOST;
        }

        let demand = clamp(raw, 0.0, 1.0);
        tracing::trace!(
            hotel_id = %ctx.hotel_id,
            occ_factor,
            time_factor,
            competitor_factor,
            demand,
            "Demand forecast"
        );
        demand
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn demand_ctx(window: u32, occupancy: f64, competitor: Option<f64>) -> DemandContext {
        DemandContext {
            hotel_id: "H1".to_string(),
            room_type: "DLX".to_string(),
            check_in: NaiveDate::from_ymd_opt(2025, 12, 20).unwrap(),
            booking_window_days: window,
            current_occupancy: occupancy,
            competitor_price: competitor,
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 1e-9, "expected {expected}, got {actual}");
    }

    #[test]
    fn test_moderate_occupancy_far_out() {
        let f = HeuristicForecaster::new();
        // 0.4*0.5 + 0.4*(1 - 100/365) + 0.2*0.5
        let expected = 0.2 + 0.4 * (1.0 - 100.0 / 365.0) + 0.1;
        assert_close(f.forecast(&demand_ctx(100, 0.5, None)), expected);
    }

    #[test]
    fn test_known_competitor_raises_demand() {
        let f = HeuristicForecaster::new();
        let without = f.forecast(&demand_ctx(10, 0.6, None));
        let with = f.forecast(&demand_ctx(10, 0.6, Some(4000.0)));
        assert_close(with - without, 0.04);
    }

    #[test]
    fn test_non_positive_competitor_is_baseline() {
        let f = HeuristicForecaster::new();
        assert_close(
            f.forecast(&demand_ctx(10, 0.6, Some(0.0))),
            f.forecast(&demand_ctx(10, 0.6, None)),
        );
    }

    #[test]
    fn test_high_occupancy_boost_and_clamp() {
        let f = HeuristicForecaster::new();
        // 0.38 + 0.4*(1 - 2/365) + 0.1 + 0.2 > 1
        assert_close(f.forecast(&demand_ctx(2, 0.95, None)), 1.0);

        // exactly 0.7 does not get the boost
        let at_threshold = f.forecast(&demand_ctx(365, 0.7, None));
        assert_close(at_threshold, 0.28 + 0.1);
    }

    #[test]
    fn test_out_of_range_inputs_stay_in_unit_interval() {
        let f = HeuristicForecaster::new();
        let low = f.forecast(&demand_ctx(10_000, -3.0, None));
        let high = f.forecast(&demand_ctx(0, 42.0, Some(1.0)));
        assert!((0.0..=1.0).contains(&low));
        assert_close(low, 0.1);
        assert_close(high, 1.0);
    }

    #[test]
    fn test_name() {
        assert_eq!(HeuristicForecaster.name(), "HeuristicForecaster");
    }
}
