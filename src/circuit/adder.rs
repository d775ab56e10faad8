//! Ripple-carry adder.

use crate::binary::{pad, Bit, Bitstring};
use crate::circuit::full::add_bit;
use crate::circuit::trace::{ArithmeticResult, TraceEntry};

/// Add two bit strings with a chain of full adders.
///
/// The operands are zero-extended to a common width, then summed from the
/// least significant position up. A carry out of the top position becomes a
/// new leading `1`, so the result is either the aligned width or one bit
/// wider. Leading zeros are kept.
pub fn add(a: &Bitstring, b: &Bitstring) -> ArithmeticResult {
    let (a, b) = pad(a, b);
    let width = a.len();

    let mut sum_bits = Vec::with_capacity(width + 1);
    let mut trace = Vec::with_capacity(width + 1);
    let mut carry = Bit::Zero;

    for i in (0..width).rev() {
        let (x, y) = (a.get(i), b.get(i));
        let (sum, carry_out) = add_bit(x, y, carry);
        log::trace!("add bit {}: {} + {} + {} -> {} carry {}", width - 1 - i, x, y, carry, sum, carry_out);
        trace.push(TraceEntry::Add { a: x, b: y, carry_in: carry, sum, carry_out });
        sum_bits.push(sum);
        carry = carry_out;
    }

    if carry.is_one() {
        sum_bits.push(Bit::One);
        trace.push(TraceEntry::FinalCarry);
    }

    // Collected LSB first.
    sum_bits.reverse();
    let result = Bitstring::from_bits(sum_bits);
    log::debug!("add: {} + {} = {} ({} steps)", a, b, result, trace.len());

    ArithmeticResult::new(result, trace)
}
