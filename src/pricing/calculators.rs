//! Core pricing calculation functions.
//!
//! Pure functions for PPP price math - no I/O, no shared state beyond the
//! reference table passed in.

use rust_decimal::Decimal;
use rust_decimal::prelude::*;

use crate::pricing::models::ReferenceTable;

/// Round to specified decimal places using banker's rounding (ROUND_HALF_EVEN).
///
/// Banker's rounding rounds to the nearest even number when the value is exactly
/// halfway between two possibilities. This reduces cumulative rounding bias.
/// Display-layer only: `compute_price` itself never rounds.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use ppp_pricer_web::pricing::round_money;
///
/// assert_eq!(round_money(dec!(2.5), 0), dec!(2));   // rounds to even
/// assert_eq!(round_money(dec!(3.5), 0), dec!(4));   // rounds to even
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven)
}

/// Result of a price adjustment: the inputs used plus the adjusted price
#[derive(Debug, Clone, PartialEq)]
pub struct PriceQuote {
    pub base_price: Decimal,
    pub coefficient: Decimal,
    pub adjusted_price: Decimal,
}

/// Pricing calculation error types
#[derive(Debug, Clone, thiserror::Error)]
pub enum PricingError {
    #[error("Base price must not be negative (got {value})")]
    InvalidInput { value: Decimal },

    #[error("No PPP entry for country '{name}'")]
    UnknownCountry { name: String },
}

/// Compute the PPP-adjusted price for a country.
///
/// Multiplies `base_price` by the selected country's coefficient. Negative
/// base prices are rejected; callers that prefer to clamp do so at the edge.
/// No rounding is applied here - formatting to 2 decimal places is a display
/// concern.
pub fn compute_price(
    table: &ReferenceTable,
    base_price: Decimal,
    country: &str,
) -> Result<PriceQuote, PricingError> {
    if base_price < Decimal::ZERO {
        return Err(PricingError::InvalidInput { value: base_price });
    }

    let entry = table
        .get(country)
        .ok_or_else(|| PricingError::UnknownCountry {
            name: country.to_string(),
        })?;

    Ok(PriceQuote {
        base_price,
        coefficient: entry.coefficient,
        adjusted_price: base_price * entry.coefficient,
    })
}
