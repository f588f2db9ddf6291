use anyhow::{bail, Context, Result};
use log::info;
use std::env;
use std::process;

use ddm_calculator::models::ValuationInputs;
use ddm_calculator::render;
use ddm_calculator::services::validation::{has_errors, validate_all_inputs};
use ddm_calculator::services::valuation::calculate_all_models;

const USAGE: &str = "Usage: ddm_calculator [--json] <dividend> <required-return-%> \
<constant-growth-%> <short-term-growth-%> <long-term-growth-%> <high-growth-years>";

fn parse_inputs(args: &[String]) -> Result<ValuationInputs> {
    let number = |index: usize, name: &str| -> Result<f64> {
        args[index]
            .parse::<f64>()
            .with_context(|| format!("{} must be a number, got '{}'", name, args[index]))
    };

    let current_dividend = number(0, "dividend")?;
    let required_return_pct = number(1, "required return")?;
    let constant_growth_pct = number(2, "constant growth")?;
    let short_term_growth_pct = number(3, "short-term growth")?;
    let long_term_growth_pct = number(4, "long-term growth")?;
    let high_growth_years: u32 = args[5]
        .parse()
        .with_context(|| format!("high-growth years must be a whole number, got '{}'", args[5]))?;

    // Rates arrive as whole percentages; the engine works in fractions.
    Ok(ValuationInputs::from_percentages(
        current_dividend,
        required_return_pct,
        constant_growth_pct,
        short_term_growth_pct,
        long_term_growth_pct,
        high_growth_years,
    ))
}

fn main() -> Result<()> {
    // Initialize the logger
    env_logger::init();
    info!("Logger initialized. Starting the calculator...");

    let args: Vec<String> = env::args().skip(1).collect();
    let json_output = args.iter().any(|a| a == "--json");
    let values: Vec<String> = args.into_iter().filter(|a| !a.starts_with("--")).collect();

    if values.len() != 6 {
        bail!("{}", USAGE);
    }

    let inputs = parse_inputs(&values)?;
    info!("Parsed inputs: {:?}", inputs);

    // Calculation is withheld while any field fails validation.
    let errors = validate_all_inputs(&inputs);
    if has_errors(&errors) {
        for (field, message) in &errors {
            eprintln!("{}: {}", field, message);
        }
        process::exit(1);
    }

    let results = calculate_all_models(&inputs);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        print!("{}", render::price_summary(&results));
        println!();
        print!("{}", render::cash_flow_table(&results));
    }

    Ok(())
}
