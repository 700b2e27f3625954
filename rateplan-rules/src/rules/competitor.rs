use rateplan_shared::PricingContext;

use crate::engine::{PricingRule, RuleEffect};

/// Undercut a competitor that is clearly cheaper than our seasonal rate.
///
/// Exclusive: once we align to a competitor no other adjustment applies,
/// including lower-priority discounts.
#[derive(Debug, Clone)]
pub struct CompetitorAlign {
    undercut_pct: f64,
    trigger_pct: f64,
}

impl CompetitorAlign {
    pub const NAME: &'static str = "CompetitorAlign";
    pub const PRIORITY: i32 = 90;

    pub fn new(undercut_pct: f64, trigger_pct: f64) -> Self {
        Self {
            undercut_pct,
            trigger_pct,
        }
    }
}

impl PricingRule for CompetitorAlign {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn priority(&self) -> i32 {
        Self::PRIORITY
    }

    fn exclusive(&self) -> bool {
        true
    }

    fn applies(&self, ctx: &PricingContext) -> bool {
        // compared against the seasonal rate, not the running price
        ctx.competitor_price
            .is_some_and(|competitor| competitor < ctx.seasonal_price() * self.trigger_pct)
    }

    fn apply(&self, ctx: &PricingContext, current_price: f64) -> RuleEffect {
        let Some(competitor) = ctx.competitor_price else {
            return RuleEffect::new(current_price);
        };

        let target = competitor * (1.0 - self.undercut_pct);
        RuleEffect::new(current_price.min(target))
            .with("competitorPrice", competitor)
            .with("seasonalPrice", ctx.seasonal_price())
            .with("triggerPct", self.trigger_pct)
            .with("undercutPct", self.undercut_pct)
            .with("targetPrice", target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::test_context;
    use serde_json::json;

    fn rule() -> CompetitorAlign {
        CompetitorAlign::new(0.03, 0.95)
    }

    #[test]
    fn test_needs_a_known_and_cheaper_competitor() {
        let ctx = test_context();
        assert!(!rule().applies(&ctx));
        // 4750 is not strictly below 5000 * 0.95
        assert!(!rule().applies(&PricingContext { competitor_price: Some(4750.0), ..ctx.clone() }));
        assert!(rule().applies(&PricingContext { competitor_price: Some(4749.0), ..ctx.clone() }));
        // the season multiplier moves the trigger
        assert!(!rule().applies(&PricingContext {
            competitor_price: Some(4000.0),
            season_multiplier: 0.8,
            ..ctx
        }));
    }

    #[test]
    fn test_aligns_below_competitor() {
        let ctx = PricingContext { competitor_price: Some(4000.0), ..test_context() };
        let effect = rule().apply(&ctx, 6900.0);

        assert!((effect.price - 3880.0).abs() < 1e-9);
        assert_eq!(effect.metadata["competitorPrice"], json!(4000.0));
        assert_eq!(effect.metadata["triggerPct"], json!(0.95));
        assert_eq!(effect.metadata["undercutPct"], json!(0.03));
    }

    #[test]
    fn test_never_raises_the_price() {
        let ctx = PricingContext { competitor_price: Some(4000.0), ..test_context() };
        let effect = rule().apply(&ctx, 3000.0);
        assert_eq!(effect.price, 3000.0);
    }

    #[test]
    fn test_is_exclusive() {
        assert!(rule().exclusive());
        assert_eq!(rule().priority(), 90);
    }
}
