pub use crate::error::{FieldError, Result};
pub use crate::euclid::extended_gcd;
pub use crate::field::{is_prime, BigPrimeField, PrimeField};
pub use crate::traits::ModularField;
