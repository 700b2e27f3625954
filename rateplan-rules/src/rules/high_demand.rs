use rateplan_shared::PricingContext;

use crate::engine::{PricingRule, RuleEffect};

/// Second uplift driven purely by the demand forecast, whatever the occupancy.
#[derive(Debug, Clone)]
pub struct HighDemandSurge {
    demand_threshold: f64,
    multiplier: f64,
}

impl HighDemandSurge {
    pub const NAME: &'static str = "HighDemandSurge";
    pub const PRIORITY: i32 = 95;

    pub fn new(demand_threshold: f64, multiplier: f64) -> Self {
        Self {
            demand_threshold,
            multiplier,
        }
    }
}

impl PricingRule for HighDemandSurge {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn priority(&self) -> i32 {
        Self::PRIORITY
    }

    fn applies(&self, ctx: &PricingContext) -> bool {
        ctx.demand_index >= self.demand_threshold
    }

    fn apply(&self, ctx: &PricingContext, current_price: f64) -> RuleEffect {
        RuleEffect::new(current_price * self.multiplier)
            .with("demandIndex", ctx.demand_index)
            .with("demandThreshold", self.demand_threshold)
            .with("multiplier", self.multiplier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::test_context;
    use serde_json::json;

    #[test]
    fn test_ignores_occupancy() {
        let rule = HighDemandSurge::new(0.75, 1.15);
        let full_but_quiet = PricingContext {
            occupancy: 1.0,
            demand_index: 0.74,
            ..test_context()
        };
        let empty_but_hot = PricingContext { occupancy: 0.0, demand_index: 0.9, ..test_context() };

        assert!(!rule.applies(&full_but_quiet));
        assert!(rule.applies(&empty_but_hot));
    }

    #[test]
    fn test_effect_and_metadata() {
        let rule = HighDemandSurge::new(0.75, 1.15);
        let ctx = PricingContext { demand_index: 0.9, ..test_context() };
        let effect = rule.apply(&ctx, 6000.0);

        assert!((effect.price - 6900.0).abs() < 1e-9);
        assert_eq!(effect.metadata["demandIndex"], json!(0.9));
        assert_eq!(effect.metadata["multiplier"], json!(1.15));
        assert_eq!(effect.metadata.len(), 3);
    }
}
