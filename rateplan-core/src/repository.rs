use async_trait::async_trait;
use chrono::Month;

use crate::CoreResult;

/// Live pricing signals, keyed per hotel (and room type or month).
///
/// Each key is independent: a write replaces one value atomically and there
/// is no consistency across keys. Readers may observe a value that is
/// replaced a moment later.
#[async_trait]
pub trait FeedRepository: Send + Sync {
    /// Occupancy (0..1) for a hotel, or the store's default when unseen.
    async fn occupancy(&self, hotel_id: &str) -> CoreResult<f64>;

    /// Base nightly rate, or `fallback` when no rate is on file.
    async fn base_rate(&self, hotel_id: &str, room_type: &str, fallback: f64) -> CoreResult<f64>;

    /// Competitor rate. `None` means unknown, which is not the same as zero.
    async fn competitor_price(&self, hotel_id: &str, room_type: &str) -> CoreResult<Option<f64>>;

    /// Seasonal multiplier for a month, 1.0 when not configured.
    async fn season_multiplier(&self, hotel_id: &str, month: Month) -> CoreResult<f64>;

    async fn set_occupancy(&self, hotel_id: &str, value: f64) -> CoreResult<()>;

    async fn set_base_rate(&self, hotel_id: &str, room_type: &str, value: f64) -> CoreResult<()>;

    async fn set_competitor_price(
        &self,
        hotel_id: &str,
        room_type: &str,
        value: f64,
    ) -> CoreResult<()>;

    async fn set_season_multiplier(
        &self,
        hotel_id: &str,
        month: Month,
        value: f64,
    ) -> CoreResult<()>;
}
