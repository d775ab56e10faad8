//! Ripple-borrow subtractor with a sign flag.
//!
//! The result is a sign bit followed by the magnitude. The sign only records
//! whether the minuend was smaller; the magnitude bits are whatever the
//! unsigned borrow chain leaves behind, with no two's-complement correction.
//! For `a >= b` that is exactly `a - b`.

use std::cmp::Ordering;
use crate::binary::{pad, Bit, Bitstring};
use crate::circuit::full::sub_bit;
use crate::circuit::trace::{ArithmeticResult, TraceEntry};

/// Subtract `b` from `a` with a chain of full subtractors.
pub fn sub(a: &Bitstring, b: &Bitstring) -> ArithmeticResult {
    let (a, b) = pad(a, b);
    let width = a.len();
    let is_negative = a.cmp_value(&b) == Ordering::Less;

    let mut diff_bits = Vec::with_capacity(width);
    let mut trace = Vec::with_capacity(width);
    let mut borrow = Bit::Zero;

    for i in (0..width).rev() {
        let (x, y) = (a.get(i), b.get(i));
        let (difference, borrow_out) = sub_bit(x, y, borrow);
        log::trace!("sub bit {}: {} - {} - {} -> {} borrow {}", width - 1 - i, x, y, borrow, difference, borrow_out);
        trace.push(TraceEntry::Subtract { a: x, b: y, borrow_in: borrow, difference, borrow_out });
        diff_bits.push(difference);
        borrow = borrow_out;
    }

    diff_bits.reverse();
    let magnitude = Bitstring::from_bits(diff_bits).trim_leading_zeros();
    let result = magnitude.with_prefix(Bit::from_bool(is_negative));
    log::debug!("sub: {} - {} = {} (negative: {}, {} steps)", a, b, result, is_negative, trace.len());

    ArithmeticResult::new(result, trace)
}
