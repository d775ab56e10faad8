//! Binary number primitives.
//!
//! This module provides the core types for working with bits:
//! - [`Bit`] - A single binary digit (0 or 1)
//! - [`gates`] - AND, OR, XOR and NOT over bits
//! - [`Bitstring`] - An unsigned binary number of arbitrary width

mod bit;
mod bitstring;
pub mod gates;

pub use bit::Bit;
pub use bitstring::{pad, Bitstring, ParseError};
pub use gates::BitOps;
