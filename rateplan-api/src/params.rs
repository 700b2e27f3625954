//! Lenient query-string helpers shared by the handlers.

use rateplan_core::{CoreError, CoreResult};
use std::str::FromStr;

/// A present, non-blank parameter.
pub fn require(value: Option<String>, name: &str) -> CoreResult<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(CoreError::ValidationError(format!(
            "Missing required param: {}",
            name
        ))),
    }
}

pub fn parse_double(raw: &str) -> CoreResult<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| CoreError::ValidationError(format!("Invalid double: {}", raw)))
}

/// Parsed value, or `default` when absent or unparseable.
pub fn parse_or<T: FromStr>(raw: Option<&str>, default: T) -> T {
    raw.and_then(|s| s.trim().parse().ok()).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rateplan_shared::UserSegment;

    #[test]
    fn test_require() {
        assert_eq!(require(Some("H1".into()), "hotelId").unwrap(), "H1");
        let err = require(Some("  ".into()), "hotelId").unwrap_err();
        assert_eq!(err.to_string(), "Missing required param: hotelId");
        assert!(require(None, "roomType").is_err());
    }

    #[test]
    fn test_parse_double() {
        assert_eq!(parse_double("0.92").unwrap(), 0.92);
        assert_eq!(parse_double(" 4800 ").unwrap(), 4800.0);
        assert_eq!(parse_double("abc").unwrap_err().to_string(), "Invalid double: abc");
    }

    #[test]
    fn test_parse_or_falls_back() {
        assert_eq!(parse_or(Some("3"), 1u32), 3);
        assert_eq!(parse_or(Some("three"), 1u32), 1);
        assert_eq!(parse_or::<u32>(None, 1), 1);
        assert_eq!(parse_or(Some("gold"), UserSegment::Guest), UserSegment::Gold);
        assert_eq!(parse_or(Some("nobody"), UserSegment::Guest), UserSegment::Guest);
    }
}
