//! Shift-and-add multiplier.
//!
//! Built entirely from the ripple-carry [`add`]: every 1 bit of the
//! multiplier adds a shifted copy of the multiplicand to a running product.

use crate::binary::Bitstring;
use crate::circuit::adder::add;
use crate::circuit::trace::{ArithmeticResult, TraceEntry};

/// Multiply two unsigned bit strings.
///
/// The multiplicand `a` is zero-extended to `len(a) + len(b)` bits up front;
/// `b` is used as given. Multiplier bits are scanned from least significant
/// up. For each 1 bit the trace gets a partial-product summary followed by
/// the full trace of that addition; each 0 bit records a skipped partial.
pub fn mul(a: &Bitstring, b: &Bitstring) -> ArithmeticResult {
    let a = a.zero_extend(a.len() + b.len());
    let n = b.len();

    let mut product = Bitstring::zero();
    let mut trace = Vec::new();

    for i in (0..n).rev() {
        if b.get(i).is_one() {
            let partial = a.shifted_left(n - 1 - i);
            let step = add(&product, &partial);
            product = step.result;
            trace.push(TraceEntry::PartialProduct {
                partial,
                product: product.clone(),
            });
            trace.extend(step.trace);
        } else {
            trace.push(TraceEntry::SkippedPartial { width: a.len() });
        }
    }

    let result = product.trim_leading_zeros();
    log::debug!("mul: {} x {} = {} ({} steps)", a, b, result, trace.len());

    ArithmeticResult::new(result, trace)
}
