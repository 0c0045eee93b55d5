use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, VectorError};
use crate::standard::{Operand, Vector};

/// Vector operations that can be requested from a configuration.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    #[default]
    Add,
    #[serde(alias = "sub")]
    Subtract,
    #[serde(alias = "mul")]
    Multiply,
    Norm,
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Norm => "norm",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "add" => Ok(Operation::Add),
            "subtract" | "sub" => Ok(Operation::Subtract),
            "multiply" | "mul" => Ok(Operation::Multiply),
            "norm" => Ok(Operation::Norm),
            _ => Err(format!(
                "Unknown operation: {}. Expected one of add, subtract, multiply, norm",
                s
            )),
        }
    }
}

/// Right-hand operand as written in JSON: a bare number or an array.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum RhsOperand {
    Scalar(f64),
    Vector(Vec<f64>),
}

/// A single vector expression, `lhs <operation> rhs`.
///
/// With `reflected` set the operands swap sides, so a subtraction computes
/// `rhs - lhs`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct EvalConfig {
    pub operation: Operation,
    pub lhs: Vec<f64>,
    pub rhs: Option<RhsOperand>,
    pub reflected: bool,
    pub norm_order: f64,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            operation: Operation::default(),
            lhs: Vec::new(),
            rhs: None,
            reflected: false,
            norm_order: 2.0,
        }
    }
}

impl EvalConfig {
    pub fn new(operation: Operation, lhs: Vec<f64>, rhs: Option<RhsOperand>) -> Self {
        Self {
            operation,
            lhs,
            rhs,
            ..Default::default()
        }
    }

    pub fn evaluate(&self) -> Result<Vector<f64>> {
        let lhs = Vector::from_slice(&self.lhs);
        log::debug!(
            "Evaluating `{}` on {} elements (reflected: {})",
            self.operation,
            lhs.len(),
            self.reflected
        );

        match (self.operation, &self.rhs) {
            (Operation::Norm, _) => lhs.norm(self.norm_order).map(|n| Vector::from_vec(vec![n])),
            (op, None) => Err(VectorError::MissingOperand(op)),
            (op @ (Operation::Add | Operation::Subtract), Some(RhsOperand::Scalar(_))) => {
                Err(VectorError::UnsupportedOperand(op))
            }
            (Operation::Add, Some(RhsOperand::Vector(values))) => {
                if self.reflected {
                    lhs.reflected_add(values)
                } else {
                    lhs.add(&Vector::from_slice(values))
                }
            }
            (Operation::Subtract, Some(RhsOperand::Vector(values))) => {
                if self.reflected {
                    lhs.reflected_subtract(values)
                } else {
                    lhs.subtract(&Vector::from_slice(values))
                }
            }
            (Operation::Multiply, Some(RhsOperand::Scalar(s))) => {
                if self.reflected {
                    lhs.reflected_multiply(Operand::Scalar(*s))
                } else {
                    lhs.multiply(Operand::Scalar(*s))
                }
            }
            (Operation::Multiply, Some(RhsOperand::Vector(values))) => {
                let rhs = Vector::from_slice(values);
                if self.reflected {
                    lhs.reflected_multiply(Operand::Vector(&rhs))
                } else {
                    lhs.multiply(Operand::Vector(&rhs))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operation_from_str_aliases() {
        assert_eq!("ADD".parse::<Operation>().unwrap(), Operation::Add);
        assert_eq!("sub".parse::<Operation>().unwrap(), Operation::Subtract);
        assert_eq!("mul".parse::<Operation>().unwrap(), Operation::Multiply);
        assert!("divide".parse::<Operation>().is_err());
    }

    #[test]
    fn missing_rhs_is_reported() {
        let cfg = EvalConfig::new(Operation::Multiply, vec![1.0], None);
        assert_eq!(
            cfg.evaluate().unwrap_err(),
            VectorError::MissingOperand(Operation::Multiply)
        );
    }

    #[test]
    fn norm_ignores_rhs() {
        let cfg = EvalConfig::new(Operation::Norm, vec![3.0, 4.0], None);
        assert_eq!(cfg.evaluate().unwrap_err(), VectorError::NotImplemented("norm"));

        for rhs in [RhsOperand::Scalar(1.0), RhsOperand::Vector(vec![1.0])] {
            let cfg = EvalConfig::new(Operation::Norm, vec![3.0, 4.0], Some(rhs));
            assert_eq!(cfg.evaluate().unwrap_err(), VectorError::NotImplemented("norm"));
        }
    }
}
