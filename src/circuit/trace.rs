//! Step traces.
//!
//! Every top-level operation returns an [`ArithmeticResult`]: the answer plus
//! the ordered list of primitive steps that produced it.

use std::fmt;
use serde::{Serialize, Deserialize};
use crate::binary::{Bit, Bitstring};

/// One primitive step, in the order it was executed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TraceEntry {
    /// One full-adder evaluation.
    Add {
        a: Bit,
        b: Bit,
        carry_in: Bit,
        sum: Bit,
        carry_out: Bit,
    },
    /// The carry out of the top position became a new leading 1.
    FinalCarry,
    /// One full-subtractor evaluation.
    Subtract {
        a: Bit,
        b: Bit,
        borrow_in: Bit,
        difference: Bit,
        borrow_out: Bit,
    },
    /// A shifted copy of the multiplicand was added; `product` is the running
    /// product after that addition.
    PartialProduct {
        partial: Bitstring,
        product: Bitstring,
    },
    /// Multiplier bit was 0, so its all-zero partial product was not added.
    SkippedPartial { width: usize },
}

impl fmt::Display for TraceEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceEntry::Add { a, b, carry_in, sum, carry_out } => write!(
                f,
                "Add {} + {} + Carry {}: Sum = {}, New Carry = {}",
                a, b, carry_in, sum, carry_out
            ),
            TraceEntry::FinalCarry => write!(f, "Final carry: 1"),
            TraceEntry::Subtract { a, b, borrow_in, difference, borrow_out } => write!(
                f,
                "Subtract {} - {} - Borrow {}: Difference = {}, New Borrow = {}",
                a, b, borrow_in, difference, borrow_out
            ),
            TraceEntry::PartialProduct { partial, product } => {
                write!(f, "Partial Product: {} + Current Product: {}", partial, product)
            }
            TraceEntry::SkippedPartial { width } => {
                write!(f, "Partial Product (skipped as bit is 0): {}", "0".repeat(*width))
            }
        }
    }
}

/// Result of an add, sub or mul call, owned outright by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArithmeticResult {
    pub result: Bitstring,
    pub trace: Vec<TraceEntry>,
}

impl ArithmeticResult {
    pub fn new(result: Bitstring, trace: Vec<TraceEntry>) -> Self {
        Self { result, trace }
    }

    /// Trace rendered as numbered lines, `Step 1: ...` onward.
    pub fn steps(&self) -> impl Iterator<Item = String> + '_ {
        self.trace
            .iter()
            .enumerate()
            .map(|(i, entry)| format!("Step {}: {}", i + 1, entry))
    }
}
