mod field;
mod point;

pub use field::FieldElement;
pub use point::{Coordinates, Point};
