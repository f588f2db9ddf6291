// src/render.rs
//
// Text presentation for the valuation results. Display policy lives here:
// the engine reports IEEE-754 values verbatim, and this layer decides
// that a non-finite (or negative) price reads as "Invalid".
use crate::models::ModelSet;

fn format_price(price: f64) -> String {
    if price.is_finite() && price > 0.0 {
        format!("{:.2}", price)
    } else {
        "Invalid".to_string()
    }
}

fn format_amount(amount: f64) -> String {
    if amount.is_finite() {
        format!("{:.2}", amount)
    } else {
        "Invalid".to_string()
    }
}

pub fn price_summary(results: &ModelSet) -> String {
    format!(
        "Constant dividend: {}\nConstant growth:   {}\nChanging growth:   {}\n",
        format_price(results.constant.price),
        format_price(results.growth.price),
        format_price(results.changing.price),
    )
}

/// Aligned table of the three cash-flow series, one row per year. Row
/// labels come from the series verbatim.
pub fn cash_flow_table(results: &ModelSet) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<8} {:>12} {:>12} {:>12}\n",
        "", "Constant", "Growth", "Changing"
    ));
    for (index, point) in results.constant.cash_flows.iter().enumerate() {
        out.push_str(&format!(
            "{:<8} {:>12} {:>12} {:>12}\n",
            point.label,
            format_amount(point.dividend),
            format_amount(results.growth.cash_flows[index].dividend),
            format_amount(results.changing.cash_flows[index].dividend),
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ValuationInputs;
    use crate::services::valuation::calculate_all_models;

    fn results_for(constant_growth: f64) -> ModelSet {
        let inputs = ValuationInputs {
            current_dividend: 4.0,
            required_return: 0.10,
            constant_growth,
            short_term_growth: 0.15,
            long_term_growth: 0.03,
            high_growth_years: 5,
        };
        calculate_all_models(&inputs)
    }

    #[test]
    fn summary_shows_prices_to_two_decimals() {
        let summary = price_summary(&results_for(0.05));
        assert!(summary.contains("Constant dividend: 40.00"));
        assert!(summary.contains("Constant growth:   84.00"));
    }

    #[test]
    fn non_finite_price_renders_as_invalid() {
        let summary = price_summary(&results_for(0.10));
        assert!(summary.contains("Constant growth:   Invalid"));
        // The other models are unaffected.
        assert!(summary.contains("Constant dividend: 40.00"));
    }

    #[test]
    fn negative_price_renders_as_invalid() {
        let summary = price_summary(&results_for(0.12));
        assert!(summary.contains("Constant growth:   Invalid"));
    }

    #[test]
    fn table_has_one_row_per_year_plus_header() {
        let table = cash_flow_table(&results_for(0.05));
        assert_eq!(table.lines().count(), 12);
        assert!(table.contains("Year 0"));
        assert!(table.contains("Year 10"));
    }
}
