use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValuationError {
    #[error(
        "Degenerate DCF parameters: discount rate ({discount_rate}) must exceed the perpetuity growth rate ({perpetuity_growth_rate})."
    )]
    DegenerateParameters {
        discount_rate: f64,
        perpetuity_growth_rate: f64,
    },
}
