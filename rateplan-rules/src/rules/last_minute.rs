use rateplan_shared::PricingContext;

use crate::engine::{PricingRule, RuleEffect};

/// Fill empty rooms close to check-in.
#[derive(Debug, Clone)]
pub struct LastMinuteDeal {
    max_days: u32,
    max_occupancy: f64,
    discount_pct: f64,
}

impl LastMinuteDeal {
    pub const NAME: &'static str = "LastMinuteDeal";
    pub const PRIORITY: i32 = 70;

    pub fn new(max_days: u32, max_occupancy: f64, discount_pct: f64) -> Self {
        Self {
            max_days,
            max_occupancy,
            discount_pct,
        }
    }
}

impl PricingRule for LastMinuteDeal {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn priority(&self) -> i32 {
        Self::PRIORITY
    }

    fn applies(&self, ctx: &PricingContext) -> bool {
        ctx.booking_window_days <= self.max_days && ctx.occupancy <= self.max_occupancy
    }

    fn apply(&self, ctx: &PricingContext, current_price: f64) -> RuleEffect {
        RuleEffect::new(current_price * (1.0 - self.discount_pct))
            .with("bookingWindowDays", ctx.booking_window_days)
            .with("maxDays", self.max_days)
            .with("occupancy", ctx.occupancy)
            .with("maxOccupancy", self.max_occupancy)
            .with("discountPct", self.discount_pct)
    }
}
