use chrono::NaiveDate;
use serde::Serialize;

use super::segment::UserSegment;

/// Everything the rule pipeline needs to price one booking.
///
/// Built once per request and handed to rules by shared reference only.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingContext {
    pub hotel_id: String,
    pub room_type: String,
    pub check_in: NaiveDate,
    pub nights: u32,
    pub segment: UserSegment,

    /// Nightly base rate before any adjustment
    pub base_price: f64,

    /// Current occupancy, 0..1
    pub occupancy: f64,

    /// Competitor rate for the same room type, when one is known
    pub competitor_price: Option<f64>,

    /// Seasonal multiplier for the check-in month (1.0 = neutral)
    pub season_multiplier: f64,

    /// Whole days between today and check-in, never negative
    pub booking_window_days: u32,

    /// Forecaster output, 0..1
    pub demand_index: f64,
}

impl PricingContext {
    /// Base price with the seasonal multiplier applied; the pipeline's starting point.
    pub fn seasonal_price(&self) -> f64 {
        self.base_price * self.season_multiplier
    }
}

/// Inputs of a demand forecast.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DemandContext {
    pub hotel_id: String,
    pub room_type: String,
    pub check_in: NaiveDate,
    pub booking_window_days: u32,
    pub current_occupancy: f64,
    pub competitor_price: Option<f64>,
}

/// Whole days from `today` until `check_in`, floored at zero.
pub fn booking_window_days(today: NaiveDate, check_in: NaiveDate) -> u32 {
    let days = (check_in - today).num_days().max(0);
    u32::try_from(days).unwrap_or(u32::MAX)
}
