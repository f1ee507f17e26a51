pub mod error;
pub mod euclid;
pub mod field;
pub mod prelude;
pub mod traits;

pub use error::{FieldError, Result};
pub use euclid::extended_gcd;
pub use field::{is_prime, BigPrimeField, PrimeField};
pub use traits::ModularField;
