mod income_calculator;
mod income_model;

#[cfg(test)]
mod income_calculator_tests;

pub use income_calculator::summarize_dividends;
pub use income_model::DividendSummary;
