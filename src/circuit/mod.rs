//! Arithmetic circuits built from logic gates.
//!
//! This module provides:
//! - [`full`] - One-bit full adder and full subtractor
//! - [`add`] - Ripple-carry addition
//! - [`sub`] - Ripple-borrow subtraction with a sign bit
//! - [`mul`] - Shift-and-add multiplication
//!
//! Each operation is a pure function of its operands and returns an
//! [`ArithmeticResult`] carrying the answer and the step trace.

pub mod full;
mod adder;
mod subtractor;
mod multiplier;
mod trace;

pub use adder::add;
pub use subtractor::sub;
pub use multiplier::mul;
pub use trace::{ArithmeticResult, TraceEntry};
