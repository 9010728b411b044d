//! Calculator page route handler

use askama::Template;
use axum::{
    extract::{Query, State},
    response::Html,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::{AppError, Result};
use crate::pricing::requests::CalculatorQuery;
use crate::pricing::{compute_price, round_money, BASELINE_COUNTRY};
use crate::AppState;

/// Calculator page template
#[derive(Template)]
#[template(path = "calculator.html")]
struct CalculatorTemplate {
    countries: Vec<String>,
    selected_country: String,
    flag: String,
    base_price_input: String,
    base_price_display: String,
    coefficient_display: String,
    adjusted_display: String,
    message: String,
}

/// Calculator page: renders the form and the quote for the current inputs.
///
/// Form input is recovered, not rejected: a negative base price clamps to
/// zero and an unknown country resets to the default selection, so the page
/// always renders a consistent quote.
pub async fn page(
    State(state): State<AppState>,
    Query(query): Query<CalculatorQuery>,
) -> Result<Html<String>> {
    let table = &state.table;

    let base_price = match query.parsed_base_price() {
        Some(price) if price < Decimal::ZERO => {
            tracing::warn!("Negative base price {} clamped to zero", price);
            Decimal::ZERO
        }
        Some(price) => price,
        None => dec!(10.00),
    };

    let country = match query.country {
        Some(name) if table.get(&name).is_some() => name,
        Some(name) => {
            tracing::warn!("Unknown country '{}' reset to default", name);
            table.default_country(BASELINE_COUNTRY)
        }
        None => table.default_country(BASELINE_COUNTRY),
    };

    // Inputs are sanitized above, so this only fails if the table is broken
    let quote = compute_price(table, base_price, &country)
        .map_err(|e| AppError::Internal(e.to_string()))?;
    let entry = table.get(&country).ok_or(AppError::NotFound)?;

    let adjusted_display = format!("${:.2}", round_money(quote.adjusted_price, 2));

    let template = CalculatorTemplate {
        countries: table.sorted_names(),
        selected_country: country.clone(),
        flag: entry.flag.clone(),
        base_price_input: format!("{:.2}", round_money(base_price, 2)),
        base_price_display: format!("${:.2}", round_money(base_price, 2)),
        coefficient_display: format!("x {}", quote.coefficient),
        message: format!(
            "Le prix recommandé pour un utilisateur en {} est de {} (USD).",
            country, adjusted_display
        ),
        adjusted_display,
    };

    Ok(Html(template.render()?))
}
