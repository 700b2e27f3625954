use axum::{
    extract::State,
    routing::post,
    Json, Router,
};
use rateplan_core::{CoreError, CoreResult};
use rateplan_store::parse_month;
use serde::{Deserialize, Serialize};

use crate::error::{method_not_allowed, AppError};
use crate::extract::LastWinsQuery;
use crate::params::{parse_double, require};
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedQuery {
    pub hotel_id: Option<String>,
    pub room_type: Option<String>,
    pub month: Option<String>,
    pub value: Option<String>,
}

impl FeedQuery {
    fn hotel_id(&self) -> CoreResult<String> {
        require(self.hotel_id.clone(), "hotelId")
    }

    fn room_type(&self) -> CoreResult<String> {
        require(self.room_type.clone(), "roomType")
    }

    fn value(&self) -> CoreResult<f64> {
        parse_double(&require(self.value.clone(), "value")?)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FeedValue {
    Occupancy(f64),
    CompetitorPrice(f64),
    BaseRate(f64),
    SeasonMultiplier(f64),
}

/// Acknowledgement echoed back after a feed write.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedUpdated {
    pub ok: bool,
    pub hotel_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<&'static str>,
    #[serde(flatten)]
    pub value: FeedValue,
}

impl FeedUpdated {
    fn new(hotel_id: String, value: FeedValue) -> Self {
        Self {
            ok: true,
            hotel_id,
            room_type: None,
            month: None,
            value,
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/feeds/occupancy",
            post(update_occupancy).fallback(method_not_allowed),
        )
        .route(
            "/feeds/competitor",
            post(update_competitor).fallback(method_not_allowed),
        )
        .route(
            "/feeds/baseRate",
            post(update_base_rate).fallback(method_not_allowed),
        )
        .route(
            "/feeds/season",
            post(update_season).fallback(method_not_allowed),
        )
}

/// POST /feeds/occupancy?hotelId=H1&value=0.92
pub async fn update_occupancy(
    State(state): State<AppState>,
    LastWinsQuery(query): LastWinsQuery<FeedQuery>,
) -> Result<Json<FeedUpdated>, AppError> {
    let hotel_id = query.hotel_id()?;
    let value = query.value()?;

    state.feeds.set_occupancy(&hotel_id, value).await?;

    Ok(Json(FeedUpdated::new(hotel_id, FeedValue::Occupancy(value))))
}

/// POST /feeds/competitor?hotelId=H1&roomType=DLX&value=4800
pub async fn update_competitor(
    State(state): State<AppState>,
    LastWinsQuery(query): LastWinsQuery<FeedQuery>,
) -> Result<Json<FeedUpdated>, AppError> {
    let hotel_id = query.hotel_id()?;
    let room_type = query.room_type()?;
    let value = query.value()?;

    state
        .feeds
        .set_competitor_price(&hotel_id, &room_type, value)
        .await?;

    Ok(Json(FeedUpdated {
        room_type: Some(room_type),
        ..FeedUpdated::new(hotel_id, FeedValue::CompetitorPrice(value))
    }))
}

/// POST /feeds/baseRate?hotelId=H1&roomType=DLX&value=5200
pub async fn update_base_rate(
    State(state): State<AppState>,
    LastWinsQuery(query): LastWinsQuery<FeedQuery>,
) -> Result<Json<FeedUpdated>, AppError> {
    let hotel_id = query.hotel_id()?;
    let room_type = query.room_type()?;
    let value = query.value()?;

    state.feeds.set_base_rate(&hotel_id, &room_type, value).await?;

    Ok(Json(FeedUpdated {
        room_type: Some(room_type),
        ..FeedUpdated::new(hotel_id, FeedValue::BaseRate(value))
    }))
}

/// POST /feeds/season?hotelId=H1&month=12&value=1.3
pub async fn update_season(
    State(state): State<AppState>,
    LastWinsQuery(query): LastWinsQuery<FeedQuery>,
) -> Result<Json<FeedUpdated>, AppError> {
    let hotel_id = query.hotel_id()?;
    let raw_month = require(query.month.clone(), "month")?;
    let month = parse_month(&raw_month)
        .ok_or_else(|| CoreError::ValidationError(format!("Invalid month: {}", raw_month)))?;
    let value = query.value()?;

    state
        .feeds
        .set_season_multiplier(&hotel_id, month, value)
        .await?;

    Ok(Json(FeedUpdated {
        month: Some(month.name()),
        ..FeedUpdated::new(hotel_id, FeedValue::SeasonMultiplier(value))
    }))
}
