use std::ops::Div;
use std::ops::Mul;
use std::ops::Rem;
use std::ops::Sub;

use num_traits::One;
use num_traits::Zero;

/// Extended Euclidean algorithm: returns `(g, x, y)` such that
/// `a*x + b*y == g == gcd(a, b)`.
///
/// Generic over the integer representation, so the same body serves
/// machine-width integers (`i64`, `i128`) and [`BigInt`][num_bigint::BigInt];
/// the result representation always matches the input representation.
///
/// The quotient is computed as `(b - b mod a) / a` so the division is exact
/// for every representation, matching the back-substitution
/// `(g, y1 - q * x1, x1)` over the recursive result for `(b mod a, a)`.
pub fn extended_gcd<T>(a: T, b: T) -> (T, T, T)
where
    T: Clone
        + Zero
        + One
        + Sub<Output = T>
        + Mul<Output = T>
        + Div<Output = T>
        + Rem<Output = T>,
{
    if a.is_zero() {
        return (b, T::zero(), T::one());
    }
    let r = b.clone() % a.clone();
    let q = (b - r.clone()) / a.clone();
    let (g, x1, y1) = extended_gcd(r, a);
    (g, y1 - q * x1.clone(), x1)
}
