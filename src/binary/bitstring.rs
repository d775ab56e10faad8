//! Arbitrary-width unsigned bit strings.
//!
//! A [`Bitstring`] stores bits most-significant first, the same order they
//! are written in text. It is never empty once parsed.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;
use crate::binary::Bit;

/// An unsigned binary number of any width, MSB first.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Bitstring {
    bits: Vec<Bit>,
}

impl Bitstring {
    /// The single-bit string `0`.
    pub fn zero() -> Self {
        Self { bits: vec![Bit::Zero] }
    }

    /// Build from bits, MSB first. An empty slice becomes `0`.
    pub fn from_bits(bits: impl Into<Vec<Bit>>) -> Self {
        let bits = bits.into();
        if bits.is_empty() {
            return Self::zero();
        }
        Self { bits }
    }

    /// Shortest representation of `value` (no leading zeros).
    pub fn from_u128(mut value: u128) -> Self {
        if value == 0 {
            return Self::zero();
        }
        let mut bits = Vec::with_capacity(128);
        while value > 0 {
            bits.push(Bit::from_bool(value & 1 == 1));
            value >>= 1;
        }
        bits.reverse();
        Self { bits }
    }

    /// Numeric value, or `None` if it needs more than 128 bits.
    pub fn to_u128(&self) -> Option<u128> {
        let significant = self.trim_leading_zeros();
        if significant.len() > 128 {
            return None;
        }
        Some(
            significant
                .bits
                .iter()
                .fold(0u128, |acc, b| (acc << 1) | b.to_u8() as u128),
        )
    }

    /// Bits, MSB first.
    #[inline]
    pub fn bits(&self) -> &[Bit] {
        &self.bits
    }

    /// Bit at `index`, counting from the MSB.
    #[inline]
    pub fn get(&self, index: usize) -> Bit {
        self.bits[index]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Never true for a parsed or padded value.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Left-pad with zeros up to `width`. Longer strings are returned unchanged.
    pub fn zero_extend(&self, width: usize) -> Self {
        if self.len() >= width {
            return self.clone();
        }
        let mut bits = vec![Bit::Zero; width - self.len()];
        bits.extend_from_slice(&self.bits);
        Self { bits }
    }

    /// Append `n` zeros on the right (multiply by 2^n).
    pub fn shifted_left(&self, n: usize) -> Self {
        let mut bits = self.bits.clone();
        bits.resize(self.len() + n, Bit::Zero);
        Self { bits }
    }

    /// Drop leading zeros, keeping a single `0` for an all-zero value.
    pub fn trim_leading_zeros(&self) -> Self {
        match self.bits.iter().position(|b| b.is_one()) {
            Some(first) => Self { bits: self.bits[first..].to_vec() },
            None => Self::zero(),
        }
    }

    /// Prepend one bit on the left.
    pub fn with_prefix(&self, bit: Bit) -> Self {
        let mut bits = Vec::with_capacity(self.len() + 1);
        bits.push(bit);
        bits.extend_from_slice(&self.bits);
        Self { bits }
    }

    /// Compare numeric values, regardless of width.
    pub fn cmp_value(&self, other: &Self) -> Ordering {
        let (a, b) = pad(self, other);
        // Equal widths, MSB first: lexicographic order is numeric order.
        a.bits.cmp(&b.bits)
    }

    /// Parse from text over `{'0', '1'}`.
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        if s.is_empty() {
            return Err(ParseError::Empty);
        }
        let bits = s
            .chars()
            .enumerate()
            .map(|(position, ch)| Bit::from_char(ch).ok_or(ParseError::InvalidChar { ch, position }))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { bits })
    }
}

/// Left-pad the shorter operand with zeros so both share the wider length.
///
/// Numeric values are unchanged, and applying it to an already aligned pair
/// is a no-op.
pub fn pad(a: &Bitstring, b: &Bitstring) -> (Bitstring, Bitstring) {
    let width = a.len().max(b.len());
    (a.zero_extend(width), b.zero_extend(width))
}

impl Default for Bitstring {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Debug for Bitstring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bitstring({})", self)
    }
}

impl fmt::Display for Bitstring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in &self.bits {
            write!(f, "{}", bit)?;
        }
        Ok(())
    }
}

impl FromStr for Bitstring {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Bitstring::parse(s)
    }
}

impl Serialize for Bitstring {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Bitstring {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Bitstring::parse(&s).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Error Types
// ============================================================================

/// Errors that can occur when parsing binary strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty binary string")]
    Empty,

    #[error("invalid binary digit {ch:?} at position {position}")]
    InvalidChar { ch: char, position: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bs(s: &str) -> Bitstring {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!(bs("0101").to_string(), "0101");
        assert_eq!(bs("0").len(), 1);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Bitstring::parse(""), Err(ParseError::Empty));
        assert_eq!(
            Bitstring::parse("10201"),
            Err(ParseError::InvalidChar { ch: '2', position: 2 })
        );
        assert_eq!(
            Bitstring::parse(" 1"),
            Err(ParseError::InvalidChar { ch: ' ', position: 0 })
        );
    }

    #[test]
    fn test_u128_conversion() {
        for val in [0u128, 1, 2, 5, 255, 1 << 64, u128::MAX] {
            assert_eq!(Bitstring::from_u128(val).to_u128(), Some(val));
        }
        assert_eq!(Bitstring::from_u128(6).to_string(), "110");
        assert_eq!(bs("000101").to_u128(), Some(5));
    }

    #[test]
    fn test_to_u128_overflow() {
        let wide = Bitstring::from_u128(u128::MAX).shifted_left(1);
        assert_eq!(wide.to_u128(), None);
        // Leading zeros do not count against the width.
        let padded = Bitstring::from_u128(u128::MAX).zero_extend(200);
        assert_eq!(padded.to_u128(), Some(u128::MAX));
    }

    #[test]
    fn test_pad_equalizes_lengths() {
        let (a, b) = pad(&bs("1"), &bs("0110"));
        assert_eq!(a.to_string(), "0001");
        assert_eq!(b.to_string(), "0110");

        let (a, b) = pad(&bs("101"), &bs("11"));
        assert_eq!((a.to_string(), b.to_string()), ("101".into(), "011".into()));
    }

    #[test]
    fn test_pad_idempotent() {
        let once = pad(&bs("1"), &bs("10110"));
        let twice = pad(&once.0, &once.1);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_trim_leading_zeros() {
        assert_eq!(bs("000110").trim_leading_zeros().to_string(), "110");
        assert_eq!(bs("0000").trim_leading_zeros().to_string(), "0");
        assert_eq!(bs("1").trim_leading_zeros().to_string(), "1");
    }

    #[test]
    fn test_shift_and_prefix() {
        assert_eq!(bs("11").shifted_left(2).to_string(), "1100");
        assert_eq!(bs("11").shifted_left(0).to_string(), "11");
        assert_eq!(bs("01").with_prefix(Bit::One).to_string(), "101");
    }

    #[test]
    fn test_cmp_value_ignores_width() {
        assert_eq!(bs("0011").cmp_value(&bs("11")), Ordering::Equal);
        assert_eq!(bs("01").cmp_value(&bs("11")), Ordering::Less);
        assert_eq!(bs("100").cmp_value(&bs("0011")), Ordering::Greater);
    }

    #[test]
    fn test_serde_as_text() {
        let json = serde_json::to_string(&bs("1010")).unwrap();
        assert_eq!(json, "\"1010\"");
        let back: Bitstring = serde_json::from_str(&json).unwrap();
        assert_eq!(back, bs("1010"));
        assert!(serde_json::from_str::<Bitstring>("\"12\"").is_err());
    }
}
