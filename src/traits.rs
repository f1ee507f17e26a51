use crate::error::Result;

/// Capability set of a prime field with a runtime modulus.
///
/// Each implementor works over exactly one element representation:
/// [`PrimeField`][crate::field::PrimeField] over `u64` and
/// [`BigPrimeField`][crate::field::BigPrimeField] over
/// [`BigInt`][num_bigint::BigInt]. Tying the representation to the
/// implementing type makes mixing representations within a call a type
/// error rather than a runtime inconsistency.
pub trait ModularField {
    type Element;

    /// `(a * b) mod m`. Commutative.
    #[must_use]
    fn mul(&self, a: Self::Element, b: Self::Element) -> Self::Element;

    /// Multiplicative inverse of `a` modulo `m`, normalized into `[0, m)`.
    ///
    /// Fails with [`FieldError::DivisionByZero`][crate::FieldError] when
    /// `a ≡ 0 (mod m)`; zero has no inverse in a field.
    fn inv(&self, a: Self::Element) -> Result<Self::Element>;

    /// `(a / b) mod m`, i.e. `mul(a mod m, inv(b mod m))`.
    ///
    /// Propagates [`FieldError::DivisionByZero`][crate::FieldError] from
    /// [`inv`][Self::inv] when `b ≡ 0 (mod m)`.
    fn div(&self, a: Self::Element, b: Self::Element) -> Result<Self::Element>;

    /// `base^exponent mod m` for a non-negative exponent.
    ///
    /// `pow(a, 0) == 1` for every `a`, including `a ≡ 0`. Negative
    /// exponents are outside the contract.
    #[must_use]
    fn pow(&self, base: Self::Element, exponent: Self::Element) -> Self::Element;

    /// `n! mod m` for non-negative `n`, with `fac(0) == fac(1) == 1`.
    #[must_use]
    fn fac(&self, n: Self::Element) -> Self::Element;
}
