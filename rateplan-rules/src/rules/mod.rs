mod competitor;
mod early_bird;
mod high_demand;
mod last_minute;
mod loyalty;
mod surge;

pub use competitor::CompetitorAlign;
pub use early_bird::EarlyBirdDiscount;
pub use high_demand::HighDemandSurge;
pub use last_minute::LastMinuteDeal;
pub use loyalty::LoyaltyDiscount;
pub use surge::SurgePricing;

use crate::engine::PricingRule;
use crate::settings::RuleSettings;

/// The standard rule set. Registration order is irrelevant; the engine
/// sorts by priority.
pub fn build_rules(settings: &RuleSettings) -> Vec<Box<dyn PricingRule>> {
    vec![
        Box::new(CompetitorAlign::new(
            settings.competitor.undercut_pct,
            settings.competitor.trigger_pct,
        )),
        Box::new(SurgePricing::new(
            settings.surge.occupancy_threshold,
            settings.surge.demand_threshold,
            settings.surge.multiplier,
        )),
        Box::new(HighDemandSurge::new(
            settings.high_demand.demand_threshold,
            settings.high_demand.multiplier,
        )),
        Box::new(EarlyBirdDiscount::new(
            settings.early_bird.min_days,
            settings.early_bird.discount_pct,
        )),
        Box::new(LastMinuteDeal::new(
            settings.last_minute.max_days,
            settings.last_minute.max_occupancy,
            settings.last_minute.discount_pct,
        )),
        Box::new(LoyaltyDiscount::new(settings.loyalty.discounts.clone())),
    ]
}

#[cfg(test)]
pub(crate) fn test_context() -> rateplan_shared::PricingContext {
    rateplan_shared::PricingContext {
        hotel_id: "H1".to_string(),
        room_type: "DLX".to_string(),
        check_in: chrono::NaiveDate::from_ymd_opt(2025, 6, 15).unwrap(),
        nights: 1,
        segment: rateplan_shared::UserSegment::Guest,
        base_price: 5000.0,
        occupancy: 0.5,
        competitor_price: None,
        season_multiplier: 1.0,
        booking_window_days: 30,
        demand_index: 0.5,
    }
}
