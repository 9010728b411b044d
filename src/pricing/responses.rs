//! Response DTOs for pricing API endpoints.

use rust_decimal::Decimal;
use serde::Serialize;

/// Money value for JSON responses
#[derive(Debug, Clone, Serialize)]
pub struct MoneyResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub currency: String,
}

/// Response for a computed price quote
#[derive(Debug, Serialize)]
pub struct PriceQuoteResponse {
    pub country: String,
    pub code: String,
    pub flag: String,
    pub base_price: MoneyResponse,
    #[serde(with = "rust_decimal::serde::str")]
    pub coefficient: Decimal,
    pub adjusted_price: MoneyResponse,
}

/// Response for the country listing
#[derive(Debug, Serialize)]
pub struct CountriesResponse {
    pub countries: Vec<String>,
    pub default_country: String,
}

/// Generic pricing error response
#[derive(Debug, Serialize)]
pub struct PricingErrorResponse {
    pub error_type: String,
    pub message: String,
}
