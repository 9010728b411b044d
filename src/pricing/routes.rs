//! HTTP/JSON routes for the pricing engine.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};

use crate::pricing::calculators::{compute_price, PricingError};
use crate::pricing::models::BASELINE_COUNTRY;
use crate::pricing::requests::ComputePriceRequest;
use crate::pricing::responses::{
    CountriesResponse, MoneyResponse, PriceQuoteResponse, PricingErrorResponse,
};
use crate::AppState;

/// All quotes are denominated in the baseline currency
const QUOTE_CURRENCY: &str = "USD";

/// Router for the JSON pricing API
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/price", post(compute))
        .route("/api/countries", get(countries))
        .route("/health", get(health))
}

/// Compute an adjusted price quote
async fn compute(
    State(state): State<AppState>,
    Json(req): Json<ComputePriceRequest>,
) -> Response {
    let quote = match compute_price(&state.table, req.base_price, &req.country) {
        Ok(quote) => quote,
        Err(err) => return pricing_error(err),
    };

    // compute_price validated the name, so the entry is present
    let Some(entry) = state.table.get(&req.country) else {
        return pricing_error(PricingError::UnknownCountry { name: req.country });
    };

    Json(PriceQuoteResponse {
        country: entry.name.clone(),
        code: entry.code.clone(),
        flag: entry.flag.clone(),
        base_price: MoneyResponse {
            amount: quote.base_price,
            currency: QUOTE_CURRENCY.to_string(),
        },
        coefficient: quote.coefficient,
        adjusted_price: MoneyResponse {
            amount: quote.adjusted_price,
            currency: QUOTE_CURRENCY.to_string(),
        },
    })
    .into_response()
}

/// List selectable countries in display order
async fn countries(State(state): State<AppState>) -> Json<CountriesResponse> {
    Json(CountriesResponse {
        countries: state.table.sorted_names(),
        default_country: state.table.default_country(BASELINE_COUNTRY),
    })
}

/// Liveness check
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

fn pricing_error(err: PricingError) -> Response {
    let (status, error_type) = match &err {
        PricingError::InvalidInput { .. } => (StatusCode::UNPROCESSABLE_ENTITY, "invalid_input"),
        PricingError::UnknownCountry { .. } => (StatusCode::NOT_FOUND, "unknown_country"),
    };
    tracing::warn!("Pricing request rejected: {}", err);

    (
        status,
        Json(PricingErrorResponse {
            error_type: error_type.to_string(),
            message: err.to_string(),
        }),
    )
        .into_response()
}
