// src/services/valuation.rs
use log::warn;

use crate::models::{CashFlowPoint, ModelResult, ModelSet, ValuationInputs, HORIZON_YEARS};

// Every series shares the year-0 outlay convention and the "Year N" label
// scheme so the three models can be charted or tabulated together.
fn build_cash_flows<F>(price: f64, dividend_for_year: F) -> Vec<CashFlowPoint>
where
    F: Fn(u32) -> f64,
{
    (0..=HORIZON_YEARS)
        .map(|year| {
            let dividend = if year == 0 { -price } else { dividend_for_year(year) };
            CashFlowPoint {
                year,
                label: format!("Year {}", year),
                dividend,
            }
        })
        .collect()
}

/// Zero-growth perpetuity: price = D0 / r. Dividends never grow.
pub fn constant_dividend(inputs: &ValuationInputs) -> ModelResult {
    let d0 = inputs.current_dividend;
    let price = d0 / inputs.required_return;
    ModelResult {
        price,
        cash_flows: build_cash_flows(price, |_| d0),
    }
}

/// Gordon growth: price = D0 * (1 + g) / (r - g).
///
/// IEEE-754 division carries the degenerate cases through verbatim:
/// r == g yields an infinite price, r < g a negative one. Callers decide
/// what a non-finite or negative price means for display.
pub fn constant_growth(inputs: &ValuationInputs) -> ModelResult {
    let d0 = inputs.current_dividend;
    let r = inputs.required_return;
    let g = inputs.constant_growth;

    let d1 = d0 * (1.0 + g);
    let price = d1 / (r - g);
    if !price.is_finite() {
        warn!("constant-growth price is non-finite (r = {}, g = {})", r, g);
    }

    ModelResult {
        price,
        cash_flows: build_cash_flows(price, |t| d0 * (1.0 + g).powi(t as i32)),
    }
}

/// Two-stage growth: n years of dividends compounding at the short-term
/// rate, each discounted at r, then a terminal value capitalizing the
/// first long-term dividend at (r - gl), discounted back n years.
///
/// Finite iff r > gl. The short-term rate is unconstrained relative to r
/// since stage one is discounted explicitly rather than capitalized.
pub fn changing_growth(inputs: &ValuationInputs) -> ModelResult {
    let d0 = inputs.current_dividend;
    let r = inputs.required_return;
    let gs = inputs.short_term_growth;
    let gl = inputs.long_term_growth;
    // Domain is 0..=10; validation reports anything larger, the formula
    // clamps so the series stays 11 points.
    let n = inputs.high_growth_years.min(HORIZON_YEARS);

    let mut stage_one = 0.0;
    let mut last_dividend = d0;
    for t in 1..=n {
        last_dividend = d0 * (1.0 + gs).powi(t as i32);
        stage_one += last_dividend / (1.0 + r).powi(t as i32);
    }

    let terminal_dividend = last_dividend * (1.0 + gl);
    let terminal_value = terminal_dividend / (r - gl);
    let price = stage_one + terminal_value / (1.0 + r).powi(n as i32);
    if !price.is_finite() {
        warn!("changing-growth price is non-finite (r = {}, gl = {})", r, gl);
    }

    // The displayed series keeps compounding past the high-growth window:
    // years 1..n at gs, years n+1..10 at gl from the last stage-one
    // dividend. Valuation itself only uses the n explicit years plus the
    // terminal value.
    let cash_flows = build_cash_flows(price, |t| {
        if t <= n {
            d0 * (1.0 + gs).powi(t as i32)
        } else {
            let pivot = d0 * (1.0 + gs).powi(n as i32);
            pivot * (1.0 + gl).powi((t - n) as i32)
        }
    });

    ModelResult { price, cash_flows }
}

/// Evaluates all three models over the shared 10-year horizon. Pure and
/// total: identical inputs always produce identical results.
pub fn calculate_all_models(inputs: &ValuationInputs) -> ModelSet {
    ModelSet {
        constant: constant_dividend(inputs),
        growth: constant_growth(inputs),
        changing: changing_growth(inputs),
    }
}
