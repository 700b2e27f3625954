use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serializer;
use std::str::FromStr;

/// Round to two decimal places, half-up.
///
/// Works on the shortest decimal representation of `value` rather than on
/// its binary expansion, so `2.675` becomes `2.68` the way a cashier would
/// round it. Values that cannot be represented as a decimal (NaN, infinities,
/// magnitudes beyond ~7.9e28) are returned unchanged.
pub fn round_half_up(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }

    Decimal::from_str(&value.to_string())
        .ok()
        .map(|d| d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|d| d.to_f64())
        .unwrap_or(value)
}

/// Bound `value` to `[min, max]`. A NaN input collapses to `min`.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// serde helper: emit an `f64` rounded half-up to two decimals.
pub fn serialize_rounded<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_f64(round_half_up(*value))
}
