pub mod heuristic;

pub use heuristic::HeuristicForecaster;

use rateplan_shared::DemandContext;

/// Demand forecasting strategy.
///
/// Implementations must return a value in `[0, 1]`, higher meaning more
/// booking pressure. The rule pipeline treats it as an opaque input.
pub trait DemandForecaster: Send + Sync {
    fn name(&self) -> &str;

    fn forecast(&self, ctx: &DemandContext) -> f64;
}
