use thiserror::Error;

/// Common result type used across this crate.
pub type Result<T, E = FieldError> = core::result::Result<T, E>;

/// Errors raised by prime field construction and arithmetic.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum FieldError {
    #[error("modulus {0} is not prime")]
    InvalidModulus(u64),
    #[error("division by zero: operand is congruent to 0 modulo the field modulus")]
    DivisionByZero,
}
