//! Input boundary.
//!
//! The circuits only accept [`Bitstring`]s, so all validation of raw text
//! happens here, before any arithmetic runs. Errors name the operand that
//! was rejected.

use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};
use thiserror::Error;
use crate::binary::{Bitstring, ParseError};
use crate::circuit::{self, ArithmeticResult};

/// Which of the two inputs an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    A,
    B,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::A => write!(f, "A"),
            Operand::B => write!(f, "B"),
        }
    }
}

/// Parse one operand, tagging any error with its name.
pub fn parse_operand(operand: Operand, text: &str) -> Result<Bitstring, InputError> {
    Bitstring::parse(text).map_err(|e| match e {
        ParseError::Empty => InputError::Empty { operand },
        ParseError::InvalidChar { ch, position } => InputError::InvalidChar { operand, ch, position },
    })
}

/// Parse both operands. Operand A is checked first.
pub fn parse_operands(a: &str, b: &str) -> Result<(Bitstring, Bitstring), InputError> {
    let a = parse_operand(Operand::A, a)?;
    let b = parse_operand(Operand::B, b)?;
    Ok((a, b))
}

/// The three supported operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Addition,
    Subtraction,
    Multiplication,
}

impl Operation {
    pub const ALL: [Operation; 3] = [
        Operation::Addition,
        Operation::Subtraction,
        Operation::Multiplication,
    ];

    /// Run this operation on validated operands.
    pub fn apply(self, a: &Bitstring, b: &Bitstring) -> ArithmeticResult {
        match self {
            Operation::Addition => circuit::add(a, b),
            Operation::Subtraction => circuit::sub(a, b),
            Operation::Multiplication => circuit::mul(a, b),
        }
    }

    /// Validate raw text and run. The usual entry point for front ends.
    pub fn evaluate(self, a: &str, b: &str) -> Result<ArithmeticResult, InputError> {
        let (a, b) = parse_operands(a, b)?;
        Ok(self.apply(&a, &b))
    }

    /// Name of the result: Sum, Difference or Product.
    pub const fn result_label(self) -> &'static str {
        match self {
            Operation::Addition => "Sum",
            Operation::Subtraction => "Difference",
            Operation::Multiplication => "Product",
        }
    }

    /// Decimal value of a result produced by this operation.
    ///
    /// Subtraction results are a sign bit followed by magnitude bits. With
    /// the sign set, the magnitude is the unsigned borrow-chain residue
    /// `(a - b) mod 2^n`, not `|a - b|`, so there is no decimal reading and
    /// `None` is returned. Also `None` if the value exceeds 128 bits.
    pub fn decimal_value(self, result: &Bitstring) -> Option<u128> {
        match self {
            Operation::Subtraction => {
                let (sign, magnitude) = result.bits().split_first()?;
                if sign.is_one() {
                    return None;
                }
                Bitstring::from_bits(magnitude.to_vec()).to_u128()
            }
            _ => result.to_u128(),
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            Operation::Addition => '+',
            Operation::Subtraction => '-',
            Operation::Multiplication => '×',
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Addition => "Addition",
            Operation::Subtraction => "Subtraction",
            Operation::Multiplication => "Multiplication",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Operation {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "add" | "addition" | "+" => Ok(Operation::Addition),
            "sub" | "subtraction" | "-" => Ok(Operation::Subtraction),
            "mul" | "multiplication" | "*" | "x" => Ok(Operation::Multiplication),
            _ => Err(InputError::UnknownOperation(s.to_string())),
        }
    }
}

/// Errors raised while turning raw user input into operands.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("operand {operand} is empty")]
    Empty { operand: Operand },

    #[error("operand {operand} is not a binary number: {ch:?} at position {position}")]
    InvalidChar { operand: Operand, ch: char, position: usize },

    #[error("unknown operation: {0:?} (expected add, sub or mul)")]
    UnknownOperation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_operands_ok() {
        let (a, b) = parse_operands("101", "1").unwrap();
        assert_eq!(a.to_string(), "101");
        assert_eq!(b.to_string(), "1");
    }

    #[test]
    fn test_error_names_operand() {
        assert_eq!(
            parse_operands("10", "1a"),
            Err(InputError::InvalidChar { operand: Operand::B, ch: 'a', position: 1 })
        );
        assert_eq!(parse_operands("", "1"), Err(InputError::Empty { operand: Operand::A }));
        // A is reported even when both are bad.
        assert!(matches!(
            parse_operands("2", "3"),
            Err(InputError::InvalidChar { operand: Operand::A, .. })
        ));
    }

    #[test]
    fn test_error_messages() {
        let err = parse_operands("1", "12").unwrap_err();
        assert_eq!(err.to_string(), "operand B is not a binary number: '2' at position 1");
    }

    #[test]
    fn test_operation_from_str() {
        assert_eq!("add".parse::<Operation>(), Ok(Operation::Addition));
        assert_eq!("Subtraction".parse::<Operation>(), Ok(Operation::Subtraction));
        assert_eq!("*".parse::<Operation>(), Ok(Operation::Multiplication));
        assert_eq!(
            "div".parse::<Operation>(),
            Err(InputError::UnknownOperation("div".into()))
        );
    }

    #[test]
    fn test_evaluate_dispatches() {
        assert_eq!(Operation::Addition.evaluate("11", "01").unwrap().result.to_string(), "100");
        assert_eq!(Operation::Subtraction.evaluate("11", "01").unwrap().result.to_string(), "010");
        assert_eq!(Operation::Multiplication.evaluate("10", "11").unwrap().result.to_string(), "110");
        assert!(Operation::Addition.evaluate("1", "x").is_err());
    }

    #[test]
    fn test_decimal_value() {
        let add = Operation::Addition.evaluate("11", "01").unwrap();
        assert_eq!(Operation::Addition.decimal_value(&add.result), Some(4));

        let mul = Operation::Multiplication.evaluate("10", "11").unwrap();
        assert_eq!(Operation::Multiplication.decimal_value(&mul.result), Some(6));

        // 4 - 1: sign 0, magnitude 11
        let sub = Operation::Subtraction.evaluate("100", "001").unwrap();
        assert_eq!(Operation::Subtraction.decimal_value(&sub.result), Some(3));
    }

    #[test]
    fn test_decimal_value_negative_subtraction_has_no_reading() {
        // 1 - 4: magnitude bits are 5 (= -3 mod 8), which is not the answer.
        let sub = Operation::Subtraction.evaluate("001", "100").unwrap();
        assert_eq!(sub.result.to_string(), "1101");
        assert_eq!(Operation::Subtraction.decimal_value(&sub.result), None);
    }

    #[test]
    fn test_labels() {
        let labels: Vec<_> = Operation::ALL.iter().map(|op| op.result_label()).collect();
        assert_eq!(labels, ["Sum", "Difference", "Product"]);
    }
}
