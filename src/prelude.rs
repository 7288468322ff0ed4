use thiserror::Error;

/// Largest value whose square fits in an `i32`: 46340² = 2147395600 <= i32::MAX.
pub const I32_SQRT_MAX: i32 = 46_340;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ErrorsISR{
    #[error("invalid input range: {0}")]
    InvalidInputRange(&'static str),
    #[error("contract violation: {0}")]
    ContractViolation(&'static str),
    #[error("misconfiguration: {0}")]
    Misconfiguration(&'static str)
}
