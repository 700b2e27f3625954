use serde::Serialize;

use crate::money::serialize_rounded;

/// What a rule recorded about its decision: thresholds, percentages and the
/// context fields it read.
pub type RuleMetadata = serde_json::Map<String, serde_json::Value>;

/// Audit record for one rule that fired.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppliedRule {
    pub name: String,
    pub priority: i32,
    pub exclusive: bool,
    #[serde(serialize_with = "serialize_rounded")]
    pub before: f64,
    #[serde(serialize_with = "serialize_rounded")]
    pub after: f64,
    pub metadata: RuleMetadata,
}

/// Result of one pass of the rule pipeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceComputation {
    #[serde(serialize_with = "serialize_rounded")]
    pub base_price: f64,
    #[serde(serialize_with = "serialize_rounded")]
    pub final_price: f64,
    #[serde(serialize_with = "serialize_rounded")]
    pub demand_index: f64,
    /// Rules that fired, in firing order
    pub applied_rules: Vec<AppliedRule>,
    pub audit_trail: Vec<String>,
}

impl PriceComputation {
    pub fn applied(&self, rule_name: &str) -> Option<&AppliedRule> {
        self.applied_rules.iter().find(|r| r.name == rule_name)
    }

    pub fn was_applied(&self, rule_name: &str) -> bool {
        self.applied(rule_name).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_computation_json_shape() {
        let mut metadata = RuleMetadata::new();
        metadata.insert("discountPct".to_string(), json!(0.1));

        let computation = PriceComputation {
            base_price: 5000.0,
            final_price: 4500.0,
            demand_index: 0.590_410_958_9,
            applied_rules: vec![AppliedRule {
                name: "EarlyBirdDiscount".to_string(),
                priority: 80,
                exclusive: false,
                before: 5000.0,
                after: 4499.999_999_9,
                metadata,
            }],
            audit_trail: vec!["Start base: 5000.00; seasonMultiplier: 1.00 => 5000.00".to_string()],
        };

        let value = serde_json::to_value(&computation).unwrap();
        assert_eq!(value["basePrice"], json!(5000.0));
        assert_eq!(value["finalPrice"], json!(4500.0));
        assert_eq!(value["demandIndex"], json!(0.59));
        assert_eq!(value["appliedRules"][0]["name"], json!("EarlyBirdDiscount"));
        assert_eq!(value["appliedRules"][0]["after"], json!(4500.0));
        assert_eq!(value["appliedRules"][0]["metadata"]["discountPct"], json!(0.1));
        assert_eq!(value["auditTrail"].as_array().unwrap().len(), 1);

        assert!(computation.was_applied("EarlyBirdDiscount"));
        assert!(!computation.was_applied("SurgePricing"));
    }
}
