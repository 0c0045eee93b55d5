//! esp: a small modeling and simulation package.
//!
//! The crate currently provides a generic [`standard::Vector`] with checked
//! element access and elementwise arithmetic, plus a serde-backed
//! [`config::EvalConfig`] describing a single vector expression so that
//! front ends can drive the arithmetic from JSON.
pub mod config;
pub mod error;
pub mod standard;

pub use error::{Result, VectorError};
pub use standard::{Operand, Orientation, Vector};
