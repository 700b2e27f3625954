pub mod computation;
pub mod context;
pub mod segment;

pub use computation::{AppliedRule, PriceComputation, RuleMetadata};
pub use context::{booking_window_days, DemandContext, PricingContext};
pub use segment::UserSegment;
