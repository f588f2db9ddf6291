// src/services/validation.rs
use std::collections::BTreeMap;

use crate::models::{Field, ValidationErrors, ValuationInputs, HORIZON_YEARS};

// Required return is a fraction; 1.0 corresponds to the 100% upper bound.
const MAX_REQUIRED_RETURN: f64 = 1.0;

/// Checks a single field against its rule. Cross-field rules (a growth
/// rate at or above the required return) are reported against the growth
/// field, so the other models stay independently evaluable.
pub fn validate_field(inputs: &ValuationInputs, field: Field) -> Option<String> {
    match field {
        Field::CurrentDividend => {
            let d = inputs.current_dividend;
            if !d.is_finite() || d <= 0.0 {
                Some("Current dividend must be a positive number".to_string())
            } else {
                None
            }
        }
        Field::RequiredReturn => {
            let r = inputs.required_return;
            if !r.is_finite() || r <= 0.0 {
                Some("Required return must be a positive number".to_string())
            } else if r > MAX_REQUIRED_RETURN {
                Some("Required return must be 100% or less".to_string())
            } else {
                None
            }
        }
        Field::ConstantGrowth => {
            let g = inputs.constant_growth;
            if !g.is_finite() {
                Some("Growth rate must be a number".to_string())
            } else if g >= inputs.required_return {
                Some("Growth rate must be less than the required return".to_string())
            } else {
                None
            }
        }
        Field::ShortTermGrowth => {
            // Unconstrained relative to the required return: the high-growth
            // phase is discounted explicitly, never capitalized.
            if !inputs.short_term_growth.is_finite() {
                Some("Short-term growth rate must be a number".to_string())
            } else {
                None
            }
        }
        Field::LongTermGrowth => {
            let g = inputs.long_term_growth;
            if !g.is_finite() {
                Some("Long-term growth rate must be a number".to_string())
            } else if g >= inputs.required_return {
                Some("Long-term growth rate must be less than the required return".to_string())
            } else {
                None
            }
        }
        Field::HighGrowthYears => {
            if inputs.high_growth_years > HORIZON_YEARS {
                Some(format!(
                    "High-growth years must be between 0 and {}",
                    HORIZON_YEARS
                ))
            } else {
                None
            }
        }
    }
}

/// Runs every field rule and collects the failures, keyed by field.
pub fn validate_all_inputs(inputs: &ValuationInputs) -> ValidationErrors {
    let mut errors = BTreeMap::new();
    for field in Field::ALL {
        if let Some(message) = validate_field(inputs, field) {
            errors.insert(field, message);
        }
    }
    errors
}

pub fn has_errors(errors: &ValidationErrors) -> bool {
    !errors.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_inputs() -> ValuationInputs {
        ValuationInputs {
            current_dividend: 4.0,
            required_return: 0.10,
            constant_growth: 0.05,
            short_term_growth: 0.15,
            long_term_growth: 0.03,
            high_growth_years: 5,
        }
    }

    #[test]
    fn valid_inputs_produce_no_errors() {
        let errors = validate_all_inputs(&valid_inputs());
        assert!(errors.is_empty());
        assert!(!has_errors(&errors));
    }

    #[test]
    fn rejects_non_positive_dividend() {
        let mut inputs = valid_inputs();
        inputs.current_dividend = 0.0;
        let errors = validate_all_inputs(&inputs);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(&Field::CurrentDividend).map(String::as_str),
            Some("Current dividend must be a positive number")
        );
    }

    #[test]
    fn rejects_non_finite_dividend() {
        let mut inputs = valid_inputs();
        inputs.current_dividend = f64::NAN;
        assert!(validate_field(&inputs, Field::CurrentDividend).is_some());
    }

    #[test]
    fn rejects_non_positive_required_return() {
        let mut inputs = valid_inputs();
        inputs.required_return = 0.0;
        assert!(validate_field(&inputs, Field::RequiredReturn).is_some());
        inputs.required_return = -0.05;
        assert!(validate_field(&inputs, Field::RequiredReturn).is_some());
    }

    #[test]
    fn rejects_required_return_above_one() {
        let mut inputs = valid_inputs();
        inputs.required_return = 1.5;
        assert!(validate_field(&inputs, Field::RequiredReturn).is_some());
    }

    #[test]
    fn growth_must_be_strictly_below_required_return() {
        let mut inputs = valid_inputs();
        inputs.constant_growth = inputs.required_return;
        assert!(validate_field(&inputs, Field::ConstantGrowth).is_some());
        inputs.constant_growth = inputs.required_return - 1e-9;
        assert!(validate_field(&inputs, Field::ConstantGrowth).is_none());
    }

    #[test]
    fn growth_violation_is_keyed_to_the_growth_field() {
        let mut inputs = valid_inputs();
        inputs.long_term_growth = 0.20;
        let errors = validate_all_inputs(&inputs);
        assert_eq!(errors.len(), 1);
        assert!(errors.contains_key(&Field::LongTermGrowth));
        assert!(!errors.contains_key(&Field::RequiredReturn));
    }

    #[test]
    fn short_term_growth_may_exceed_required_return() {
        let mut inputs = valid_inputs();
        inputs.short_term_growth = 0.50;
        assert!(validate_field(&inputs, Field::ShortTermGrowth).is_none());
    }

    #[test]
    fn high_growth_years_capped_at_horizon() {
        let mut inputs = valid_inputs();
        inputs.high_growth_years = 10;
        assert!(validate_field(&inputs, Field::HighGrowthYears).is_none());
        inputs.high_growth_years = 11;
        assert!(validate_field(&inputs, Field::HighGrowthYears).is_some());
    }

    #[test]
    fn collects_multiple_failures_at_once() {
        let inputs = ValuationInputs {
            current_dividend: -1.0,
            required_return: 0.05,
            constant_growth: 0.08,
            short_term_growth: 0.10,
            long_term_growth: 0.06,
            high_growth_years: 12,
        };
        let errors = validate_all_inputs(&inputs);
        assert!(errors.contains_key(&Field::CurrentDividend));
        assert!(errors.contains_key(&Field::ConstantGrowth));
        assert!(errors.contains_key(&Field::LongTermGrowth));
        assert!(errors.contains_key(&Field::HighGrowthYears));
        assert_eq!(errors.len(), 4);
    }
}
