pub mod models;
pub mod money;

pub use models::{
    booking_window_days, AppliedRule, DemandContext, PriceComputation, PricingContext,
    RuleMetadata, UserSegment,
};
pub use money::{clamp, round_half_up};
