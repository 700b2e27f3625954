use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use chrono::{DateTime, NaiveDate, Utc};
use rateplan_core::{CoreError, CoreResult};
use rateplan_shared::{PriceComputation, UserSegment};
use serde::{Deserialize, Serialize};

use crate::error::{method_not_allowed, AppError};
use crate::extract::LastWinsQuery;
use crate::params::{parse_double, parse_or, require};
use crate::quote::QuoteRequest;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Raw query string of `GET /price`. Everything is optional here so that
/// missing and malformed values can be reported (or defaulted) one by one.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuery {
    pub hotel_id: Option<String>,
    pub room_type: Option<String>,
    pub check_in: Option<String>,
    pub nights: Option<String>,
    pub user_segment: Option<String>,
    pub base: Option<String>,
}

impl PriceQuery {
    pub fn into_request(self) -> CoreResult<QuoteRequest> {
        let hotel_id = require(self.hotel_id, "hotelId")?;
        let room_type = require(self.room_type, "roomType")?;
        let raw_check_in = require(self.check_in, "checkIn")?;
        let check_in = NaiveDate::parse_from_str(raw_check_in.trim(), "%Y-%m-%d").map_err(|_| {
            CoreError::ValidationError(format!("Invalid checkIn date: {}", raw_check_in))
        })?;

        // NaN or infinite bases are treated like a missing one
        let base_price = self
            .base
            .as_deref()
            .and_then(|raw| parse_double(raw).ok())
            .filter(|b| b.is_finite());

        Ok(QuoteRequest {
            hotel_id,
            room_type,
            check_in,
            nights: parse_or(self.nights.as_deref(), 1),
            segment: parse_or(self.user_segment.as_deref(), UserSegment::Guest),
            base_price,
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceResponse {
    #[serde(flatten)]
    pub computation: PriceComputation,
    pub engine_forecaster: String,
    pub timestamp: DateTime<Utc>,
}

// ============================================================================
// Handlers
// ============================================================================

pub fn routes() -> Router<AppState> {
    Router::new().route("/price", get(get_price).fallback(method_not_allowed))
}

/// GET /price?hotelId=H1&roomType=DLX&checkIn=2025-12-20&nights=3&userSegment=GOLD&base=5000
pub async fn get_price(
    State(state): State<AppState>,
    LastWinsQuery(query): LastWinsQuery<PriceQuery>,
) -> Result<Json<PriceResponse>, AppError> {
    let request = query.into_request()?;
    let today = Utc::now().date_naive();

    let computation = state.quotes.quote(&request, today).await?;

    Ok(Json(PriceResponse {
        computation,
        engine_forecaster: state.quotes.forecaster_name().to_string(),
        timestamp: Utc::now(),
    }))
}
