#![deny(clippy::all)]
#![deny(clippy::dbg_macro)]

//! Prime field arithmetic with runtime moduli and the short Weierstrass group law

pub mod arithmetic;
pub mod curve;

pub use arithmetic::{Coordinates, FieldElement, Point};
pub use curve::Curve;
pub use num_bigint::{BigInt, BigUint};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("value {value} not in field range 0..{modulus}")]
    ValueOutOfRange { value: BigUint, modulus: BigUint },
    #[error("operands belong to different fields (moduli {0} and {1})")]
    FieldMismatch(BigUint, BigUint),
    #[error("attempted to invert the zero element")]
    TriedToInvertZero,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PointError {
    #[error("point ({x}, {y}) is not on the curve")]
    NotOnCurve { x: BigUint, y: BigUint },
    #[error("points are not on the same curve")]
    CurveMismatch,
    #[error(transparent)]
    Field(#[from] FieldError),
}
