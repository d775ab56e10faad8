//! One-bit full adder and full subtractor.
//!
//! Both are wired purely from the gates in [`crate::binary::gates`]; carries
//! and borrows are threaded explicitly by the caller.

use crate::binary::{Bit, BitOps};

/// Full adder: adds `a + b + carry_in`, returns (sum, carry_out).
#[inline]
pub fn add_bit(a: Bit, b: Bit, carry_in: Bit) -> (Bit, Bit) {
    let half = a.xor(b);
    let sum = half.xor(carry_in);
    let carry_out = a.and(b).or(carry_in.and(half));
    (sum, carry_out)
}

/// Full subtractor: computes `a - b - borrow_in`, returns (difference, borrow_out).
#[inline]
pub fn sub_bit(a: Bit, b: Bit, borrow_in: Bit) -> (Bit, Bit) {
    let difference = a.xor(b).xor(borrow_in);
    let not_a = a.not();
    let borrow_out = not_a.and(b).or(borrow_in.and(not_a.xor(b)));
    (difference, borrow_out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_adder_matches_integer_sum() {
        for a in Bit::ALL {
            for b in Bit::ALL {
                for c in Bit::ALL {
                    let (sum, carry) = add_bit(a, b, c);
                    let total = a.to_u8() + b.to_u8() + c.to_u8();
                    assert_eq!(sum.to_u8() + 2 * carry.to_u8(), total,
                        "add_bit({:?}, {:?}, {:?})", a, b, c);
                }
            }
        }
    }

    #[test]
    fn test_full_subtractor_matches_integer_difference() {
        for a in Bit::ALL {
            for b in Bit::ALL {
                for c in Bit::ALL {
                    let (diff, borrow) = sub_bit(a, b, c);
                    let expected = a.to_u8() as i8 - b.to_u8() as i8 - c.to_u8() as i8;
                    assert_eq!(diff.to_u8() as i8 - 2 * borrow.to_u8() as i8, expected,
                        "sub_bit({:?}, {:?}, {:?})", a, b, c);
                }
            }
        }
    }

    #[test]
    fn test_known_rows() {
        assert_eq!(add_bit(Bit::One, Bit::One, Bit::Zero), (Bit::Zero, Bit::One));
        assert_eq!(add_bit(Bit::One, Bit::One, Bit::One), (Bit::One, Bit::One));
        assert_eq!(sub_bit(Bit::Zero, Bit::One, Bit::Zero), (Bit::One, Bit::One));
        assert_eq!(sub_bit(Bit::Zero, Bit::Zero, Bit::One), (Bit::One, Bit::One));
        assert_eq!(sub_bit(Bit::One, Bit::One, Bit::One), (Bit::One, Bit::One));
    }
}
