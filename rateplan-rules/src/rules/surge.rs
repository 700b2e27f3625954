use rateplan_shared::PricingContext;

use crate::engine::{PricingRule, RuleEffect};

/// Uplift when the hotel is filling up or demand is strong.
#[derive(Debug, Clone)]
pub struct SurgePricing {
    occupancy_threshold: f64,
    demand_threshold: f64,
    multiplier: f64,
}

impl SurgePricing {
    pub const NAME: &'static str = "SurgePricing";
    pub const PRIORITY: i32 = 100;

    pub fn new(occupancy_threshold: f64, demand_threshold: f64, multiplier: f64) -> Self {
        Self {
            occupancy_threshold,
            demand_threshold,
            multiplier,
        }
    }
}

impl PricingRule for SurgePricing {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn priority(&self) -> i32 {
        Self::PRIORITY
    }

    fn applies(&self, ctx: &PricingContext) -> bool {
        ctx.occupancy >= self.occupancy_threshold || ctx.demand_index >= self.demand_threshold
    }

    fn apply(&self, ctx: &PricingContext, current_price: f64) -> RuleEffect {
        RuleEffect::new(current_price * self.multiplier)
            .with("occupancy", ctx.occupancy)
            .with("occupancyThreshold", self.occupancy_threshold)
            .with("demandIndex", ctx.demand_index)
            .with("demandThreshold", self.demand_threshold)
            .with("multiplier", self.multiplier)
    }
}
