// src/models.rs
use serde::{Serialize, Deserialize};
use std::collections::BTreeMap;
use std::fmt;

/// Projection horizon shared by every model: cash flows cover years 0..=10.
pub const HORIZON_YEARS: u32 = 10;

/// Scalar inputs for all three valuation models. Rates are fractions,
/// not percentages (0.10 means 10%).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValuationInputs {
    pub current_dividend: f64,
    pub required_return: f64,
    pub constant_growth: f64,
    pub short_term_growth: f64,
    pub long_term_growth: f64,
    pub high_growth_years: u32,
}

impl ValuationInputs {
    /// Builds inputs from percent-valued rates as collected by a front-end
    /// (e.g. "10" for a 10% required return).
    pub fn from_percentages(
        current_dividend: f64,
        required_return_pct: f64,
        constant_growth_pct: f64,
        short_term_growth_pct: f64,
        long_term_growth_pct: f64,
        high_growth_years: u32,
    ) -> Self {
        ValuationInputs {
            current_dividend,
            required_return: required_return_pct / 100.0,
            constant_growth: constant_growth_pct / 100.0,
            short_term_growth: short_term_growth_pct / 100.0,
            long_term_growth: long_term_growth_pct / 100.0,
            high_growth_years,
        }
    }
}

/// One point of a projected cash-flow series. Year 0 is the purchase
/// outlay and carries a dividend equal to the negated model price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashFlowPoint {
    pub year: u32,
    pub label: String,
    pub dividend: f64,
}

/// Price plus an 11-point cash-flow series (years 0..=10). The price may
/// be non-finite when the model's growth assumption is at or above the
/// required return; the series is still populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelResult {
    pub price: f64,
    pub cash_flows: Vec<CashFlowPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSet {
    pub constant: ModelResult,
    pub growth: ModelResult,
    pub changing: ModelResult,
}

/// Input field identifiers, used to key validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    CurrentDividend,
    RequiredReturn,
    ConstantGrowth,
    ShortTermGrowth,
    LongTermGrowth,
    HighGrowthYears,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::CurrentDividend,
        Field::RequiredReturn,
        Field::ConstantGrowth,
        Field::ShortTermGrowth,
        Field::LongTermGrowth,
        Field::HighGrowthYears,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::CurrentDividend => "current_dividend",
            Field::RequiredReturn => "required_return",
            Field::ConstantGrowth => "constant_growth",
            Field::ShortTermGrowth => "short_term_growth",
            Field::LongTermGrowth => "long_term_growth",
            Field::HighGrowthYears => "high_growth_years",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Field-keyed validation messages. A field is present iff its current
/// value violates a rule; BTreeMap keeps iteration order stable.
pub type ValidationErrors = BTreeMap<Field, String>;
