use std::cmp::Reverse;

use rateplan_shared::{round_half_up, AppliedRule, PriceComputation, PricingContext, RuleMetadata};

/// One self-contained pricing behaviour.
///
/// Rules carry only their fixed configuration and are shared read-only
/// between requests.
pub trait PricingRule: Send + Sync {
    /// Stable identifier used in audit output.
    fn name(&self) -> &str;

    /// Higher runs earlier.
    fn priority(&self) -> i32;

    /// When true, nothing is evaluated after this rule fires.
    fn exclusive(&self) -> bool {
        false
    }

    fn applies(&self, ctx: &PricingContext) -> bool;

    fn apply(&self, ctx: &PricingContext, current_price: f64) -> RuleEffect;
}

/// New running price plus what the rule recorded about its decision.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleEffect {
    pub price: f64,
    pub metadata: RuleMetadata,
}

impl RuleEffect {
    pub fn new(price: f64) -> Self {
        Self {
            price,
            metadata: RuleMetadata::new(),
        }
    }

    pub fn with(mut self, key: &str, value: impl Into<serde_json::Value>) -> Self {
        self.metadata.insert(key.to_string(), value.into());
        self
    }
}

/// Runs an ordered rule set against a pricing context.
pub struct RuleEngine {
    rules: Vec<Box<dyn PricingRule>>,
}

impl RuleEngine {
    /// Sorts descending by priority. The sort is stable, so rules sharing a
    /// priority keep the order they were registered in.
    pub fn new(rules: Vec<Box<dyn PricingRule>>) -> Self {
        let mut rules = rules;
        rules.sort_by_key(|r| Reverse(r.priority()));

        for pair in rules.windows(2) {
            if pair[0].priority() == pair[1].priority() {
                tracing::warn!(
                    first = pair[0].name(),
                    second = pair[1].name(),
                    priority = pair[0].priority(),
                    "Pricing rules share a priority; falling back to registration order"
                );
            }
        }
        for rule in &rules {
            tracing::debug!(
                rule = rule.name(),
                priority = rule.priority(),
                exclusive = rule.exclusive(),
                "Registered pricing rule"
            );
        }

        Self { rules }
    }

    /// Rules in evaluation order.
    pub fn rules(&self) -> impl Iterator<Item = &(dyn PricingRule + 'static)> {
        self.rules.iter().map(|r| &**r)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn execute(&self, ctx: &PricingContext) -> PriceComputation {
        let mut audit = Vec::with_capacity(self.rules.len() + 2);
        let mut applied = Vec::new();

        let mut price = ctx.seasonal_price();
        audit.push(format!(
            "Start base: {:.2}; seasonMultiplier: {:.2} => {:.2}",
            ctx.base_price, ctx.season_multiplier, price
        ));

        for rule in &self.rules {
            if !rule.applies(ctx) {
                audit.push(format!("Rule [{}] skipped (not applicable)", rule.name()));
                continue;
            }

            let before = price;
            let effect = rule.apply(ctx, price);
            price = effect.price;

            applied.push(AppliedRule {
                name: rule.name().to_string(),
                priority: rule.priority(),
                exclusive: rule.exclusive(),
                before,
                after: price,
                metadata: effect.metadata,
            });
            audit.push(format!(
                "Rule [{}] applied: {:.2} -> {:.2}",
                rule.name(),
                before,
                price
            ));

            if rule.exclusive() {
                audit.push(format!(
                    "Rule [{}] is exclusive. Stopping further rule processing.",
                    rule.name()
                ));
                break;
            }
        }

        PriceComputation {
            base_price: round_half_up(ctx.base_price),
            final_price: round_half_up(price),
            demand_index: ctx.demand_index,
            applied_rules: applied,
            audit_trail: audit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{build_rules, test_context};
    use crate::settings::RuleSettings;

    /// Fires unconditionally with a fixed transform; used to check ordering.
    struct Step {
        name: &'static str,
        priority: i32,
        exclusive: bool,
        factor: f64,
        minus: f64,
    }

    impl Step {
        fn times(name: &'static str, priority: i32, factor: f64) -> Box<dyn PricingRule> {
            Box::new(Self {
                name,
                priority,
                exclusive: false,
                factor,
                minus: 0.0,
            })
        }

        fn minus(name: &'static str, priority: i32, minus: f64) -> Box<dyn PricingRule> {
            Box::new(Self {
                name,
                priority,
                exclusive: false,
                factor: 1.0,
                minus,
            })
        }

        fn exclusive(name: &'static str, priority: i32) -> Box<dyn PricingRule> {
            Box::new(Self {
                name,
                priority,
                exclusive: true,
                factor: 1.0,
                minus: 0.0,
            })
        }
    }

    impl PricingRule for Step {
        fn name(&self) -> &str {
            self.name
        }
        fn priority(&self) -> i32 {
            self.priority
        }
        fn exclusive(&self) -> bool {
            self.exclusive
        }
        fn applies(&self, _ctx: &PricingContext) -> bool {
            true
        }
        fn apply(&self, _ctx: &PricingContext, current_price: f64) -> RuleEffect {
            RuleEffect::new(current_price * self.factor - self.minus)
        }
    }

    struct Never;

    impl PricingRule for Never {
        fn name(&self) -> &str {
            "Never"
        }
        fn priority(&self) -> i32 {
            1000
        }
        fn exclusive(&self) -> bool {
            true
        }
        fn applies(&self, _ctx: &PricingContext) -> bool {
            false
        }
        fn apply(&self, _ctx: &PricingContext, current_price: f64) -> RuleEffect {
            RuleEffect::new(current_price * 100.0)
        }
    }

    fn names(engine: &RuleEngine) -> Vec<String> {
        engine.rules().map(|r| r.name().to_string()).collect()
    }

    #[test]
    fn test_default_rules_sort_numerically() {
        let engine = RuleEngine::new(build_rules(&RuleSettings::default()));
        assert_eq!(
            names(&engine),
            vec![
                "SurgePricing",
                "HighDemandSurge",
                "CompetitorAlign",
                "EarlyBirdDiscount",
                "LastMinuteDeal",
                "LoyaltyDiscount",
            ]
        );
        let priorities: Vec<i32> = engine.rules().map(|r| r.priority()).collect();
        assert_eq!(priorities, vec![100, 95, 90, 80, 70, 60]);
    }

    #[test]
    fn test_equal_priorities_keep_registration_order() {
        let engine = RuleEngine::new(vec![
            Step::times("a", 10, 1.0),
            Step::times("b", 50, 1.0),
            Step::times("c", 10, 1.0),
            Step::times("d", 50, 1.0),
        ]);
        assert_eq!(names(&engine), vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn test_transforms_apply_in_priority_order() {
        // (100 * 2) - 10 = 190, whereas (100 - 10) * 2 = 180
        let engine = RuleEngine::new(vec![
            Step::minus("subtract", 10, 10.0),
            Step::times("double", 20, 2.0),
        ]);
        let ctx = PricingContext { base_price: 100.0, ..test_context() };
        let result = engine.execute(&ctx);

        assert_eq!(result.final_price, 190.0);
        assert_eq!(result.applied_rules[0].name, "double");
        assert_eq!(result.applied_rules[0].before, 100.0);
        assert_eq!(result.applied_rules[0].after, 200.0);
        assert_eq!(result.applied_rules[1].before, 200.0);
        assert_eq!(result.applied_rules[1].after, 190.0);
    }

    #[test]
    fn test_season_multiplier_sets_starting_price() {
        let engine = RuleEngine::new(vec![]);
        let ctx = PricingContext {
            base_price: 5000.0,
            season_multiplier: 1.3,
            ..test_context()
        };
        let result = engine.execute(&ctx);

        assert_eq!(result.base_price, 5000.0);
        assert_eq!(result.final_price, 6500.0);
        assert!(result.applied_rules.is_empty());
        assert_eq!(
            result.audit_trail,
            vec!["Start base: 5000.00; seasonMultiplier: 1.30 => 6500.00"]
        );
    }

    #[test]
    fn test_exclusive_rule_stops_evaluation() {
        let engine = RuleEngine::new(vec![
            Step::times("after", 5, 0.5),
            Step::exclusive("stop", 10),
            Step::times("before", 20, 2.0),
        ]);
        let ctx = PricingContext { base_price: 100.0, ..test_context() };
        let result = engine.execute(&ctx);

        assert_eq!(result.final_price, 200.0);
        assert_eq!(result.applied_rules.len(), 2);
        assert!(result.applied_rules.last().unwrap().exclusive);
        assert_eq!(
            result.audit_trail.last().unwrap(),
            "Rule [stop] is exclusive. Stopping further rule processing."
        );
        assert!(result.audit_trail.iter().all(|l| !l.contains("[after]")));
    }

    #[test]
    fn test_skipped_exclusive_rule_does_not_stop_evaluation() {
        let engine = RuleEngine::new(vec![Box::new(Never), Step::times("next", 1, 1.1)]);
        let ctx = PricingContext { base_price: 100.0, ..test_context() };
        let result = engine.execute(&ctx);

        assert_eq!(result.applied_rules.len(), 1);
        assert_eq!(result.applied_rules[0].name, "next");
        assert_eq!(result.final_price, 110.0);
        assert_eq!(result.audit_trail[1], "Rule [Never] skipped (not applicable)");
        assert_eq!(result.audit_trail[2], "Rule [next] applied: 100.00 -> 110.00");
    }

    #[test]
    fn test_only_final_price_is_rounded() {
        let engine = RuleEngine::new(vec![
            Step::times("third", 2, 1.0 / 3.0),
            Step::times("triple", 1, 3.0),
        ]);
        let ctx = PricingContext { base_price: 100.0, ..test_context() };
        let result = engine.execute(&ctx);

        // rounding the intermediate 33.333.. would give 99.99
        assert_eq!(result.final_price, 100.0);
        assert!((result.applied_rules[0].after - 100.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_base_price_is_rounded_and_demand_index_passed_through() {
        let engine = RuleEngine::new(vec![]);
        let ctx = PricingContext {
            base_price: 4999.995,
            demand_index: 0.123_456,
            ..test_context()
        };
        let result = engine.execute(&ctx);
        assert_eq!(result.base_price, 5000.0);
        assert_eq!(result.demand_index, 0.123_456);
    }

    #[test]
    fn test_execute_is_repeatable() {
        let engine = RuleEngine::new(build_rules(&RuleSettings::default()));
        let ctx = PricingContext {
            occupancy: 0.9,
            competitor_price: Some(4100.0),
            demand_index: 0.8,
            ..test_context()
        };
        assert_eq!(engine.execute(&ctx), engine.execute(&ctx));
    }
}
