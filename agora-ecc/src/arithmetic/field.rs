use crate::FieldError;

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::Zero;
use serde::{Deserialize, Serialize};

use std::fmt;

/// A residue modulo a prime, reduced into `[0, modulus)` at all times.
/// The modulus is runtime data and is trusted to be prime.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldElement {
    value: BigUint,
    modulus: BigUint,
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} (mod {})", self.value, self.modulus)
    }
}

impl FieldElement {
    /// Validated construction: the value must already lie in `[0, modulus)`.
    pub fn new(value: BigUint, modulus: BigUint) -> Result<Self, FieldError> {
        if value >= modulus {
            return Err(FieldError::ValueOutOfRange { value, modulus });
        }
        Ok(Self { value, modulus })
    }

    /// Maps any signed integer into range by floored remainder, so `-1`
    /// becomes `modulus - 1`.
    pub fn reduce(value: BigInt, modulus: BigUint) -> Self {
        let reduced = value.mod_floor(&BigInt::from(modulus.clone()));
        // NOTE to_biguint is fine here because a floored remainder
        // modulo a positive modulus is non-negative
        Self {
            value: reduced.to_biguint().unwrap(),
            modulus,
        }
    }

    pub fn value(&self) -> &BigUint {
        &self.value
    }

    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    fn check_same_field(&self, other: &Self) -> Result<(), FieldError> {
        if self.modulus != other.modulus {
            return Err(FieldError::FieldMismatch(
                self.modulus.clone(),
                other.modulus.clone(),
            ));
        }
        Ok(())
    }

    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, other: &Self) -> Result<Self, FieldError> {
        self.check_same_field(other)?;
        Ok(Self {
            value: (&self.value + &other.value) % &self.modulus,
            modulus: self.modulus.clone(),
        })
    }

    pub fn subtract(&self, other: &Self) -> Result<Self, FieldError> {
        self.check_same_field(other)?;
        // lift by the modulus so the difference never goes negative
        Ok(Self {
            value: (&self.value + &self.modulus - &other.value) % &self.modulus,
            modulus: self.modulus.clone(),
        })
    }

    pub fn multiply(&self, other: &Self) -> Result<Self, FieldError> {
        self.check_same_field(other)?;
        Ok(Self {
            value: (&self.value * &other.value) % &self.modulus,
            modulus: self.modulus.clone(),
        })
    }

    /// Raises to an arbitrary signed exponent. Fermat's little theorem
    /// lets the exponent reduce modulo `modulus - 1` first, turning
    /// negative exponents into equivalent non-negative ones.
    pub fn power(&self, exponent: &BigInt) -> Self {
        let phi = BigInt::from(&self.modulus - 1u32);
        let reduced = exponent.mod_floor(&phi);
        // NOTE to_biguint is fine here because a floored remainder
        // modulo a positive modulus is non-negative
        let reduced = reduced.to_biguint().unwrap();
        Self {
            value: self.value.modpow(&reduced, &self.modulus),
            modulus: self.modulus.clone(),
        }
    }

    /// Fermat inverse, `value^(modulus - 2) mod modulus`. The formula
    /// would silently evaluate to zero for the zero element, so zero is
    /// rejected instead.
    pub fn inverse(&self) -> Result<Self, FieldError> {
        if self.value.is_zero() {
            return Err(FieldError::TriedToInvertZero);
        }
        let exponent = &self.modulus - 2u32;
        Ok(Self {
            value: self.value.modpow(&exponent, &self.modulus),
            modulus: self.modulus.clone(),
        })
    }

    pub fn divide(&self, other: &Self) -> Result<Self, FieldError> {
        self.check_same_field(other)?;
        let inverse = other.inverse()?;
        Ok(Self {
            value: (&self.value * &inverse.value) % &self.modulus,
            modulus: self.modulus.clone(),
        })
    }
}
