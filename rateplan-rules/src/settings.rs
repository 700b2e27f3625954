use std::collections::BTreeMap;

use rateplan_shared::UserSegment;
use serde::{Deserialize, Serialize};

/// Numeric parameters of every built-in rule.
///
/// Priorities and exclusivity are fixed per rule type and not configurable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RuleSettings {
    pub surge: SurgeSettings,
    pub high_demand: HighDemandSettings,
    pub early_bird: EarlyBirdSettings,
    pub last_minute: LastMinuteSettings,
    pub competitor: CompetitorSettings,
    pub loyalty: LoyaltySettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurgeSettings {
    pub occupancy_threshold: f64,
    pub demand_threshold: f64,
    /// Uplift factor, e.g. 1.20 for +20%
    pub multiplier: f64,
}

impl Default for SurgeSettings {
    fn default() -> Self {
        Self {
            occupancy_threshold: 0.80,
            demand_threshold: 0.75,
            multiplier: 1.20,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighDemandSettings {
    pub demand_threshold: f64,
    pub multiplier: f64,
}

impl Default for HighDemandSettings {
    fn default() -> Self {
        Self {
            demand_threshold: 0.75,
            multiplier: 1.15,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EarlyBirdSettings {
    pub min_days: u32,
    pub discount_pct: f64,
}

impl Default for EarlyBirdSettings {
    fn default() -> Self {
        Self {
            min_days: 60,
            discount_pct: 0.10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LastMinuteSettings {
    pub max_days: u32,
    pub max_occupancy: f64,
    pub discount_pct: f64,
}

impl Default for LastMinuteSettings {
    fn default() -> Self {
        Self {
            max_days: 3,
            max_occupancy: 0.50,
            discount_pct: 0.20,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompetitorSettings {
    /// How far below the competitor to land, e.g. 0.03 for 3% under
    pub undercut_pct: f64,
    /// Align only when competitor < seasonal price * trigger_pct
    pub trigger_pct: f64,
}

impl Default for CompetitorSettings {
    fn default() -> Self {
        Self {
            undercut_pct: 0.03,
            trigger_pct: 0.95,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoyaltySettings {
    /// Discount fraction per segment; segments not listed get nothing
    pub discounts: BTreeMap<UserSegment, f64>,
}

impl Default for LoyaltySettings {
    fn default() -> Self {
        Self {
            discounts: BTreeMap::from([
                (UserSegment::Silver, 0.03),
                (UserSegment::Gold, 0.07),
                (UserSegment::Platinum, 0.12),
                (UserSegment::Corporate, 0.08),
                (UserSegment::Loyal, 0.05),
            ]),
        }
    }
}
