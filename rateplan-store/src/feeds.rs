use async_trait::async_trait;
use chrono::Month;
use dashmap::DashMap;
use rateplan_core::{CoreError, CoreResult, FeedRepository};

use crate::app_config::FeedSettings;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct RoomKey {
    hotel_id: String,
    room_type: String,
}

impl RoomKey {
    fn new(hotel_id: &str, room_type: &str) -> Self {
        Self {
            hotel_id: hotel_id.to_string(),
            room_type: room_type.to_string(),
        }
    }
}

/// In-process feed store.
///
/// Four independent sharded maps: a write locks only the shard holding its
/// key, and readers never wait on writers of other keys.
pub struct InMemoryFeeds {
    default_occupancy: f64,
    occupancy: DashMap<String, f64>,
    base_rates: DashMap<RoomKey, f64>,
    competitor_prices: DashMap<RoomKey, f64>,
    season_multipliers: DashMap<(String, Month), f64>,
}

impl InMemoryFeeds {
    pub fn new(default_occupancy: f64) -> Self {
        Self {
            default_occupancy,
            occupancy: DashMap::new(),
            base_rates: DashMap::new(),
            competitor_prices: DashMap::new(),
            season_multipliers: DashMap::new(),
        }
    }

    /// Store pre-loaded with the configured seed values.
    pub fn from_settings(settings: &FeedSettings) -> CoreResult<Self> {
        validate_occupancy(settings.default_occupancy)
            .map_err(|e| CoreError::ConfigError(format!("feeds.default_occupancy: {}", e)))?;

        let feeds = Self::new(settings.default_occupancy);
        let seed_error = |e: CoreError| CoreError::ConfigError(format!("feed seed: {}", e));

        for seed in &settings.occupancy {
            feeds.put_occupancy(&seed.hotel_id, seed.value).map_err(seed_error)?;
        }
        for seed in &settings.base_rates {
            feeds
                .put_base_rate(&seed.hotel_id, &seed.room_type, seed.value)
                .map_err(seed_error)?;
        }
        for seed in &settings.competitor_prices {
            feeds
                .put_competitor_price(&seed.hotel_id, &seed.room_type, seed.value)
                .map_err(seed_error)?;
        }
        for seed in &settings.season_multipliers {
            let month = parse_month(&seed.month).ok_or_else(|| {
                CoreError::ConfigError(format!("feed seed: unknown month '{}'", seed.month))
            })?;
            feeds
                .put_season_multiplier(&seed.hotel_id, month, seed.value)
                .map_err(seed_error)?;
        }

        tracing::info!(
            occupancy = feeds.occupancy.len(),
            base_rates = feeds.base_rates.len(),
            competitor_prices = feeds.competitor_prices.len(),
            season_multipliers = feeds.season_multipliers.len(),
            "Seeded feed store"
        );
        Ok(feeds)
    }

    fn put_occupancy(&self, hotel_id: &str, value: f64) -> CoreResult<()> {
        validate_occupancy(value)?;
        self.occupancy.insert(hotel_id.to_string(), value);
        Ok(())
    }

    fn put_base_rate(&self, hotel_id: &str, room_type: &str, value: f64) -> CoreResult<()> {
        validate_non_negative("base rate", value)?;
        self.base_rates.insert(RoomKey::new(hotel_id, room_type), value);
        Ok(())
    }

    fn put_competitor_price(&self, hotel_id: &str, room_type: &str, value: f64) -> CoreResult<()> {
        validate_non_negative("competitor price", value)?;
        self.competitor_prices.insert(RoomKey::new(hotel_id, room_type), value);
        Ok(())
    }

    fn put_season_multiplier(&self, hotel_id: &str, month: Month, value: f64) -> CoreResult<()> {
        if !value.is_finite() || value <= 0.0 {
            return Err(CoreError::ValidationError(
                "season multiplier must be a positive number".to_string(),
            ));
        }
        self.season_multipliers.insert((hotel_id.to_string(), month), value);
        Ok(())
    }
}

#[async_trait]
impl FeedRepository for InMemoryFeeds {
    async fn occupancy(&self, hotel_id: &str) -> CoreResult<f64> {
        Ok(self
            .occupancy
            .get(hotel_id)
            .map(|v| *v)
            .unwrap_or(self.default_occupancy))
    }

    async fn base_rate(&self, hotel_id: &str, room_type: &str, fallback: f64) -> CoreResult<f64> {
        Ok(self
            .base_rates
            .get(&RoomKey::new(hotel_id, room_type))
            .map(|v| *v)
            .unwrap_or(fallback))
    }

    async fn competitor_price(&self, hotel_id: &str, room_type: &str) -> CoreResult<Option<f64>> {
        Ok(self
            .competitor_prices
            .get(&RoomKey::new(hotel_id, room_type))
            .map(|v| *v))
    }

    async fn season_multiplier(&self, hotel_id: &str, month: Month) -> CoreResult<f64> {
        Ok(self
            .season_multipliers
            .get(&(hotel_id.to_string(), month))
            .map(|v| *v)
            .unwrap_or(1.0))
    }

    async fn set_occupancy(&self, hotel_id: &str, value: f64) -> CoreResult<()> {
        self.put_occupancy(hotel_id, value)?;
        tracing::info!(hotel_id, occupancy = value, "Occupancy feed updated");
        Ok(())
    }

    async fn set_base_rate(&self, hotel_id: &str, room_type: &str, value: f64) -> CoreResult<()> {
        self.put_base_rate(hotel_id, room_type, value)?;
        tracing::info!(hotel_id, room_type, base_rate = value, "Base rate feed updated");
        Ok(())
    }

    async fn set_competitor_price(
        &self,
        hotel_id: &str,
        room_type: &str,
        value: f64,
    ) -> CoreResult<()> {
        self.put_competitor_price(hotel_id, room_type, value)?;
        tracing::info!(hotel_id, room_type, competitor_price = value, "Competitor feed updated");
        Ok(())
    }

    async fn set_season_multiplier(
        &self,
        hotel_id: &str,
        month: Month,
        value: f64,
    ) -> CoreResult<()> {
        self.put_season_multiplier(hotel_id, month, value)?;
        tracing::info!(hotel_id, month = month.name(), multiplier = value, "Season feed updated");
        Ok(())
    }
}

/// Month from a name ("December", "dec", any case) or its number (1-12).
pub fn parse_month(raw: &str) -> Option<Month> {
    let raw = raw.trim();
    match raw.parse::<u8>() {
        Ok(n) => Month::try_from(n).ok(),
        Err(_) => raw.parse::<Month>().ok(),
    }
}

fn validate_occupancy(value: f64) -> CoreResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(CoreError::ValidationError("occupancy must be in [0,1]".to_string()))
    }
}

fn validate_non_negative(what: &str, value: f64) -> CoreResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(CoreError::ValidationError(format!(
            "{} must be a non-negative number",
            what
        )))
    }
}
