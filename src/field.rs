use num_bigint::BigInt;
use num_bigint::BigUint;
use num_traits::One;
use num_traits::ToPrimitive;

use crate::error::FieldError;
use crate::error::Result;
use crate::euclid::extended_gcd;
use crate::traits::ModularField;

/// Trial-division primality check.
///
/// Deliberately O(√m): the kernel targets small-to-moderate moduli, not
/// cryptographic-scale primes, so a deterministic scan beats a
/// probabilistic test here. The squared trial divisor is widened to `u128`
/// so the loop condition cannot overflow near `u64::MAX`.
pub fn is_prime(m: u64) -> bool {
    if m < 2 {
        return false;
    }
    let mut i: u64 = 2;
    while (i as u128) * (i as u128) <= m as u128 {
        if m % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}

/// Prime field with machine-width (`u64`) elements.
///
/// The modulus is validated once at construction and never mutated.
/// Intermediate products are widened to `u128` before reduction, so
/// operands anywhere in `u64` range are handled without overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PrimeField {
    modulus: u64,
}

impl PrimeField {
    /// Construct a field from a prime modulus.
    ///
    /// Fails with [`FieldError::InvalidModulus`] when `modulus` is
    /// composite, 1, or 0.
    pub fn new(modulus: u64) -> Result<Self> {
        if !is_prime(modulus) {
            return Err(FieldError::InvalidModulus(modulus));
        }
        Ok(Self { modulus })
    }

    #[inline]
    pub const fn modulus(&self) -> u64 {
        self.modulus
    }
}

impl ModularField for PrimeField {
    type Element = u64;

    fn mul(&self, a: u64, b: u64) -> u64 {
        let m = self.modulus as u128;
        ((a as u128 % m) * (b as u128 % m) % m) as u64
    }

    fn inv(&self, a: u64) -> Result<u64> {
        let m = self.modulus as i128;
        let (g, x, _) = extended_gcd((a % self.modulus) as i128, m);
        if g != 1 {
            return Err(FieldError::DivisionByZero);
        }
        Ok(((x % m + m) % m) as u64)
    }

    fn div(&self, a: u64, b: u64) -> Result<u64> {
        let inverse = self.inv(b % self.modulus)?;
        Ok(self.mul(a % self.modulus, inverse))
    }

    fn pow(&self, base: u64, exponent: u64) -> u64 {
        let m = self.modulus as u128;
        let mut acc: u128 = 1;
        let mut base = base as u128 % m;
        let mut exp = exponent;
        while exp > 0 {
            if exp & 1 == 1 {
                acc = acc * base % m;
            }
            exp >>= 1;
            base = base * base % m;
        }
        acc as u64
    }

    fn fac(&self, n: u64) -> u64 {
        if n < 2 {
            return 1;
        }
        // Arbitrary-precision accumulator, reduced at every step; the final
        // residue is below the u64 modulus, so the narrowing is exact.
        let m = BigUint::from(self.modulus);
        let mut acc = BigUint::from(n) % &m;
        let mut i = n;
        while i > 2 {
            i -= 1;
            acc = acc * i % &m;
        }
        acc.to_u64().expect("residue is reduced below the u64 modulus")
    }
}

/// Prime field with arbitrary-precision ([`BigInt`]) elements.
///
/// The modulus itself is supplied machine-width and lifted to [`BigInt`]
/// per operation; element arithmetic never leaves the big representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BigPrimeField {
    modulus: u64,
}

impl BigPrimeField {
    /// Construct a field from a prime modulus.
    ///
    /// Fails with [`FieldError::InvalidModulus`] when `modulus` is
    /// composite, 1, or 0.
    pub fn new(modulus: u64) -> Result<Self> {
        if !is_prime(modulus) {
            return Err(FieldError::InvalidModulus(modulus));
        }
        Ok(Self { modulus })
    }

    #[inline]
    pub const fn modulus(&self) -> u64 {
        self.modulus
    }

    fn big_modulus(&self) -> BigInt {
        BigInt::from(self.modulus)
    }
}

impl ModularField for BigPrimeField {
    type Element = BigInt;

    fn mul(&self, a: BigInt, b: BigInt) -> BigInt {
        let m = self.big_modulus();
        (a % &m) * (b % &m) % m
    }

    fn inv(&self, a: BigInt) -> Result<BigInt> {
        let m = self.big_modulus();
        let (g, x, _) = extended_gcd(a % &m, m.clone());
        if !g.is_one() {
            return Err(FieldError::DivisionByZero);
        }
        Ok((x % &m + &m) % &m)
    }

    fn div(&self, a: BigInt, b: BigInt) -> Result<BigInt> {
        let m = self.big_modulus();
        let inverse = self.inv(b % &m)?;
        Ok(self.mul(a % &m, inverse))
    }

    fn pow(&self, base: BigInt, exponent: BigInt) -> BigInt {
        let m = self.big_modulus();
        let mut acc = BigInt::one();
        let mut base = base % &m;
        let mut exp = exponent;
        while exp > BigInt::ZERO {
            if exp.bit(0) {
                acc = acc * &base % &m;
            }
            exp >>= 1;
            base = &base * &base % &m;
        }
        acc
    }

    fn fac(&self, n: BigInt) -> BigInt {
        let two = BigInt::from(2);
        if n < two {
            return BigInt::one();
        }
        let m = self.big_modulus();
        let mut acc = &n % &m;
        let mut i = n;
        while i > two {
            i -= 1u32;
            acc = acc * &i % &m;
        }
        acc
    }
}

#[cfg(test)]
mod primality_tests {
    use super::*;

    #[test]
    fn small_values_classified_correctly() {
        let primes = [2u64, 3, 5, 7, 11, 13, 101, 8380417, 1_000_000_007];
        for p in primes {
            assert!(is_prime(p), "{p} is prime");
        }

        let composites = [0u64, 1, 4, 6, 8, 9, 15, 100, 1_000_000_008];
        for c in composites {
            assert!(!is_prime(c), "{c} is not prime");
        }
    }

    #[test]
    fn construction_rejects_non_prime_moduli() {
        for m in [0u64, 1, 4, 6] {
            assert_eq!(Err(FieldError::InvalidModulus(m)), PrimeField::new(m));
            assert_eq!(
                Err(FieldError::InvalidModulus(m)),
                BigPrimeField::new(m)
            );
        }
    }

    #[test]
    fn construction_accepts_prime_moduli() {
        assert_eq!(2, PrimeField::new(2).unwrap().modulus());
        assert_eq!(13, PrimeField::new(13).unwrap().modulus());
        let big = BigPrimeField::new(1_000_000_007).unwrap();
        assert_eq!(1_000_000_007, big.modulus());
    }
}
