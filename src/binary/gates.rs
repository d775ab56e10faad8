//! Logic gates.
//!
//! The four primitives every circuit in this crate is wired from.

use crate::binary::Bit;

/// AND gate.
#[inline]
pub const fn and(a: Bit, b: Bit) -> Bit {
    Bit::from_bool(a.is_one() & b.is_one())
}

/// OR gate.
#[inline]
pub const fn or(a: Bit, b: Bit) -> Bit {
    Bit::from_bool(a.is_one() | b.is_one())
}

/// XOR gate.
#[inline]
pub const fn xor(a: Bit, b: Bit) -> Bit {
    Bit::from_bool(a.is_one() ^ b.is_one())
}

/// NOT gate. Always a single bit: 1 - a.
#[inline]
pub const fn not(a: Bit) -> Bit {
    match a {
        Bit::Zero => Bit::One,
        Bit::One => Bit::Zero,
    }
}

/// Gate operations as methods, so circuits can read `a.and(b)`.
pub trait BitOps: Sized {
    fn and(self, other: Self) -> Self;
    fn or(self, other: Self) -> Self;
    fn xor(self, other: Self) -> Self;
    fn not(self) -> Self;
}

impl BitOps for Bit {
    #[inline]
    fn and(self, other: Self) -> Self {
        and(self, other)
    }

    #[inline]
    fn or(self, other: Self) -> Self {
        or(self, other)
    }

    #[inline]
    fn xor(self, other: Self) -> Self {
        xor(self, other)
    }

    #[inline]
    fn not(self) -> Self {
        not(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binary::Bit::{One, Zero};

    #[test]
    fn test_truth_tables() {
        // (a, b, and, or, xor)
        let rows = [
            (Zero, Zero, Zero, Zero, Zero),
            (Zero, One, Zero, One, One),
            (One, Zero, Zero, One, One),
            (One, One, One, One, Zero),
        ];
        for (a, b, a_and, a_or, a_xor) in rows {
            assert_eq!(and(a, b), a_and, "{:?} AND {:?}", a, b);
            assert_eq!(or(a, b), a_or, "{:?} OR {:?}", a, b);
            assert_eq!(xor(a, b), a_xor, "{:?} XOR {:?}", a, b);
        }
    }

    #[test]
    fn test_not_is_single_bit_complement() {
        assert_eq!(not(Zero), One);
        assert_eq!(not(One), Zero);
        for b in Bit::ALL {
            assert_eq!(not(b).to_u8(), 1 - b.to_u8());
            assert_eq!(not(not(b)), b);
        }
    }

    #[test]
    fn test_trait_matches_free_functions() {
        for a in Bit::ALL {
            for b in Bit::ALL {
                assert_eq!(a.and(b), and(a, b));
                assert_eq!(a.or(b), or(a, b));
                assert_eq!(a.xor(b), xor(a, b));
            }
            assert_eq!(BitOps::not(a), not(a));
        }
    }
}
