use std::sync::Arc;

use chrono::{Datelike, Month, NaiveDate};
use rateplan_core::{CoreError, CoreResult, FeedRepository};
use rateplan_forecast::DemandForecaster;
use rateplan_rules::RuleEngine;
use rateplan_shared::{
    booking_window_days, DemandContext, PriceComputation, PricingContext, UserSegment,
};

/// A fully parsed price request.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteRequest {
    pub hotel_id: String,
    pub room_type: String,
    pub check_in: NaiveDate,
    pub nights: u32,
    pub segment: UserSegment,
    /// Explicit base rate; the feed (then the fallback) is used when absent
    pub base_price: Option<f64>,
}

/// Builds pricing contexts from the feeds and the forecaster, then runs the
/// rule engine.
pub struct QuoteService {
    feeds: Arc<dyn FeedRepository>,
    forecaster: Arc<dyn DemandForecaster>,
    engine: RuleEngine,
    fallback_base_rate: f64,
}

impl QuoteService {
    pub fn new(
        feeds: Arc<dyn FeedRepository>,
        forecaster: Arc<dyn DemandForecaster>,
        engine: RuleEngine,
        fallback_base_rate: f64,
    ) -> Self {
        Self {
            feeds,
            forecaster,
            engine,
            fallback_base_rate,
        }
    }

    pub fn forecaster_name(&self) -> &str {
        self.forecaster.name()
    }

    pub fn engine(&self) -> &RuleEngine {
        &self.engine
    }

    pub async fn quote(
        &self,
        request: &QuoteRequest,
        today: NaiveDate,
    ) -> CoreResult<PriceComputation> {
        let ctx = self.build_context(request, today).await?;
        Ok(self.engine.execute(&ctx))
    }

    pub async fn build_context(
        &self,
        request: &QuoteRequest,
        today: NaiveDate,
    ) -> CoreResult<PricingContext> {
        let hotel_id = request.hotel_id.as_str();
        let room_type = request.room_type.as_str();

        let occupancy = self.feeds.occupancy(hotel_id).await?;
        let base_price = match request.base_price {
            Some(base) => base,
            None => {
                self.feeds
                    .base_rate(hotel_id, room_type, self.fallback_base_rate)
                    .await?
            }
        };
        let competitor_price = self.feeds.competitor_price(hotel_id, room_type).await?;
        let season_multiplier = self
            .feeds
            .season_multiplier(hotel_id, check_in_month(request.check_in)?)
            .await?;

        let window = booking_window_days(today, request.check_in);

        let demand_index = self.forecaster.forecast(&DemandContext {
            hotel_id: request.hotel_id.clone(),
            room_type: request.room_type.clone(),
            check_in: request.check_in,
            booking_window_days: window,
            current_occupancy: occupancy,
            competitor_price,
        });
        if !(0.0..=1.0).contains(&demand_index) {
            return Err(CoreError::InternalError(format!(
                "forecaster {} returned demand index {} outside [0,1]",
                self.forecaster.name(),
                demand_index
            )));
        }

        tracing::info!(
            hotel_id,
            room_type,
            segment = %request.segment,
            occupancy,
            demand_index,
            booking_window_days = window,
            "Pricing request"
        );

        Ok(PricingContext {
            hotel_id: request.hotel_id.clone(),
            room_type: request.room_type.clone(),
            check_in: request.check_in,
            nights: request.nights,
            segment: request.segment,
            base_price,
            occupancy,
            competitor_price,
            season_multiplier,
            booking_window_days: window,
            demand_index,
        })
    }
}

fn check_in_month(check_in: NaiveDate) -> CoreResult<Month> {
    u8::try_from(check_in.month())
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .ok_or_else(|| CoreError::InternalError(format!("no calendar month for {}", check_in)))
}
