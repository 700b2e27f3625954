use std::collections::BTreeMap;

use rateplan_shared::{PricingContext, UserSegment};

use crate::engine::{PricingRule, RuleEffect};

/// Per-segment discount; stacks with everything except a competitor alignment.
#[derive(Debug, Clone)]
pub struct LoyaltyDiscount {
    discounts: BTreeMap<UserSegment, f64>,
}

impl LoyaltyDiscount {
    pub const NAME: &'static str = "LoyaltyDiscount";
    pub const PRIORITY: i32 = 60;

    pub fn new(discounts: BTreeMap<UserSegment, f64>) -> Self {
        Self { discounts }
    }

    fn discount_for(&self, segment: UserSegment) -> f64 {
        self.discounts.get(&segment).copied().unwrap_or(0.0)
    }
}

impl PricingRule for LoyaltyDiscount {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn priority(&self) -> i32 {
        Self::PRIORITY
    }

    fn applies(&self, ctx: &PricingContext) -> bool {
        self.discount_for(ctx.segment) > 0.0
    }

    fn apply(&self, ctx: &PricingContext, current_price: f64) -> RuleEffect {
        let pct = self.discount_for(ctx.segment);
        RuleEffect::new(current_price * (1.0 - pct))
            .with("segment", ctx.segment.to_string())
            .with("discountPct", pct)
    }
}
