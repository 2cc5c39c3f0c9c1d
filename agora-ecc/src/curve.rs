use crate::arithmetic::{FieldElement, Point};
use crate::{FieldError, PointError};

use serde::{Deserialize, Serialize};

/// Parameters `a` and `b` of a short Weierstrass curve
/// `y^2 = x^3 + ax + b`, sharing one modulus. The curve is the only way
/// to create [`Point`] values, so the same parameter set flows into
/// every point it produces.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Curve {
    a: FieldElement,
    b: FieldElement,
}

impl Curve {
    pub fn new(a: FieldElement, b: FieldElement) -> Result<Self, FieldError> {
        if a.modulus() != b.modulus() {
            return Err(FieldError::FieldMismatch(
                a.modulus().clone(),
                b.modulus().clone(),
            ));
        }
        Ok(Self { a, b })
    }

    pub fn a(&self) -> &FieldElement {
        &self.a
    }

    pub fn b(&self) -> &FieldElement {
        &self.b
    }

    /// Whether `(x, y)` satisfies the curve equation.
    pub fn contains(&self, x: &FieldElement, y: &FieldElement) -> Result<bool, FieldError> {
        let lhs = y.multiply(y)?;
        let rhs = x
            .multiply(x)?
            .multiply(x)?
            .add(&self.a.multiply(x)?)?
            .add(&self.b)?;
        Ok(lhs == rhs)
    }

    /// Validated constructor for a finite point of this curve.
    pub fn point(&self, x: FieldElement, y: FieldElement) -> Result<Point, PointError> {
        if !self.contains(&x, &y)? {
            return Err(PointError::NotOnCurve {
                x: x.value().clone(),
                y: y.value().clone(),
            });
        }
        Ok(Point::affine_unchecked(self.clone(), x, y))
    }

    /// The group identity (point at infinity) of this curve. Exempt
    /// from the equation check by definition.
    pub fn identity(&self) -> Point {
        Point::identity_on(self.clone())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use num_bigint::{BigInt, BigUint};

    fn fe(value: i64, modulus: u32) -> FieldElement {
        FieldElement::reduce(BigInt::from(value), BigUint::from(modulus))
    }

    #[test]
    fn parameters_must_share_a_modulus() {
        assert_eq!(
            Curve::new(fe(5, 223), fe(7, 31)),
            Err(FieldError::FieldMismatch(
                BigUint::from(223_u32),
                BigUint::from(31_u32)
            ))
        );
        let curve = Curve::new(fe(5, 223), fe(7, 223)).unwrap();
        assert_eq!(curve.a(), &fe(5, 223));
        assert_eq!(curve.b(), &fe(7, 223));
    }

    #[test]
    fn equation_evaluation() {
        let curve = Curve::new(fe(5, 223), fe(7, 223)).unwrap();
        assert!(curve.contains(&fe(3, 223), &fe(-7, 223)).unwrap());
        assert!(curve.contains(&fe(18, 223), &fe(77, 223)).unwrap());
        assert!(!curve.contains(&fe(-2, 223), &fe(4, 223)).unwrap());

        // coordinates from a different field are an error, not a miss
        assert!(curve.contains(&fe(3, 31), &fe(7, 31)).is_err());
    }

    #[test]
    fn identity_construction() {
        let curve = Curve::new(fe(5, 223), fe(7, 223)).unwrap();
        let identity = curve.identity();
        assert!(identity.is_identity());
        assert_eq!(identity.curve(), &curve);
    }
}
