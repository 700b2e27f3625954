pub mod engine;
pub mod rules;
pub mod settings;

pub use engine::{PricingRule, RuleEffect, RuleEngine};
pub use rules::{
    build_rules, CompetitorAlign, EarlyBirdDiscount, HighDemandSurge, LastMinuteDeal,
    LoyaltyDiscount, SurgePricing,
};
pub use settings::RuleSettings;
