//! Request DTOs for pricing endpoints.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Query parameters for the calculator form.
///
/// Both fields arrive as raw strings so malformed input can be recovered in
/// the handler instead of failing extraction.
#[derive(Debug, Deserialize)]
pub struct CalculatorQuery {
    #[serde(default)]
    pub base_price: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

impl CalculatorQuery {
    /// Parse the submitted base price, if it is a well-formed number
    pub fn parsed_base_price(&self) -> Option<Decimal> {
        self.base_price
            .as_deref()
            .and_then(|raw| raw.trim().parse::<Decimal>().ok())
    }
}

/// Request to compute an adjusted price
#[derive(Debug, Deserialize)]
pub struct ComputePriceRequest {
    #[serde(with = "rust_decimal::serde::str")]
    pub base_price: Decimal,
    pub country: String,
}
