//! Pricing engine module for the PPP calculator.
//!
//! Holds the fixed purchasing-power reference table and the pure price
//! adjustment math, plus the HTTP/JSON surface over both.

pub mod calculators;
pub mod models;
pub mod requests;
pub mod responses;
pub mod routes;

// Re-export commonly used items
pub use calculators::{compute_price, round_money, PriceQuote, PricingError};
pub use models::{CountryEntry, ReferenceTable, BASELINE_COUNTRY};
pub use routes::router;
