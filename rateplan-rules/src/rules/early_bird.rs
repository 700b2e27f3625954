use rateplan_shared::PricingContext;

use crate::engine::{PricingRule, RuleEffect};

/// Reward for booking well ahead of check-in.
#[derive(Debug, Clone)]
pub struct EarlyBirdDiscount {
    min_days: u32,
    discount_pct: f64,
}

impl EarlyBirdDiscount {
    pub const NAME: &'static str = "EarlyBirdDiscount";
    pub const PRIORITY: i32 = 80;

    pub fn new(min_days: u32, discount_pct: f64) -> Self {
        Self {
            min_days,
            discount_pct,
        }
    }
}

impl PricingRule for EarlyBirdDiscount {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn priority(&self) -> i32 {
        Self::PRIORITY
    }

    fn applies(&self, ctx: &PricingContext) -> bool {
        ctx.booking_window_days >= self.min_days
    }

    fn apply(&self, ctx: &PricingContext, current_price: f64) -> RuleEffect {
        RuleEffect::new(current_price * (1.0 - self.discount_pct))
            .with("bookingWindowDays", ctx.booking_window_days)
            .with("minDays", self.min_days)
            .with("discountPct", self.discount_pct)
    }
}
