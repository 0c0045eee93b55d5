//! The standard namespace: numerical primitives that models build on.
//!
//! Currently this is the generic [`Vector`] and its multiplication
//! [`Operand`].
pub mod vector;

pub use vector::{Operand, Orientation, Vector};
