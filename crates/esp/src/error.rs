use std::error::Error;
use std::fmt;

use crate::config::Operation;

/// Errors raised by vector construction, access and arithmetic.
#[derive(Debug, Clone, PartialEq)]
pub enum VectorError {
    /// Index fell outside `[0, len)`.
    IndexOutOfRange { index: usize, len: usize },
    /// Elementwise operation between vectors of different lengths.
    LengthMismatch { left: usize, right: usize },
    /// The operation exists in the API but is not computed yet.
    NotImplemented(&'static str),
    MissingOperand(Operation),
    UnsupportedOperand(Operation),
}

impl fmt::Display for VectorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            VectorError::IndexOutOfRange { index, len } => {
                write!(f, "Index {} is out of range for vector of length {}", index, len)
            }
            VectorError::LengthMismatch { left, right } => {
                write!(f, "Vector lengths do not match ({} != {})", left, right)
            }
            VectorError::NotImplemented(op) => write!(f, "`{}` is not implemented", op),
            VectorError::MissingOperand(op) => {
                write!(f, "Operation `{}` requires a right-hand operand", op)
            }
            VectorError::UnsupportedOperand(op) => {
                write!(f, "Operation `{}` does not accept a scalar operand", op)
            }
        }
    }
}

impl Error for VectorError {}

pub type Result<T> = std::result::Result<T, VectorError>;
