//! # gatecalc
//!
//! Binary addition, subtraction and multiplication built the way hardware
//! does it: from AND, OR, XOR and NOT gates wired into full adders and full
//! subtractors, rippled across arbitrarily wide operands.
//!
//! Every operation returns the answer together with a trace of each
//! primitive step, in execution order, so the computation can be followed
//! bit by bit.
//!
//! ```
//! use gatecalc::{add, Bitstring};
//!
//! let a: Bitstring = "11".parse().unwrap();
//! let b: Bitstring = "01".parse().unwrap();
//! let out = add(&a, &b);
//! assert_eq!(out.result.to_string(), "100");
//! assert_eq!(out.trace.len(), 3);
//! ```

pub mod binary;
pub mod circuit;
pub mod input;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used types
pub use binary::{pad, Bit, Bitstring, ParseError};
pub use circuit::{add, sub, mul, ArithmeticResult, TraceEntry};
pub use input::{parse_operands, InputError, Operand, Operation};
