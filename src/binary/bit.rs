//! Single binary digit.
//!
//! A bit holds one of two values, 0 or 1. Keeping it as an enum rather than
//! a raw integer means every gate in [`crate::binary::gates`] is total: there
//! is no third value to guard against.

use std::fmt;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A single binary digit.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[repr(u8)]
pub enum Bit {
    /// Zero (0)
    #[default]
    Zero = 0,
    /// One (1)
    One = 1,
}

impl Bit {
    /// Both bit values in ascending order.
    pub const ALL: [Bit; 2] = [Bit::Zero, Bit::One];

    /// Create a bit from a text character.
    ///
    /// Returns `None` for anything other than `'0'` or `'1'`.
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '0' => Some(Bit::Zero),
            '1' => Some(Bit::One),
            _ => None,
        }
    }

    /// Text character for this bit.
    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            Bit::Zero => '0',
            Bit::One => '1',
        }
    }

    /// Create a bit from a boolean (true = 1).
    #[inline]
    pub const fn from_bool(value: bool) -> Self {
        if value { Bit::One } else { Bit::Zero }
    }

    /// Integer value, 0 or 1.
    #[inline]
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// True for 1.
    #[inline]
    pub const fn is_one(self) -> bool {
        matches!(self, Bit::One)
    }

    /// True for 0.
    #[inline]
    pub const fn is_zero(self) -> bool {
        matches!(self, Bit::Zero)
    }
}

impl fmt::Debug for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

// Serialized as the integers 0 and 1.
impl Serialize for Bit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.to_u8())
    }
}

impl<'de> Deserialize<'de> for Bit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match u8::deserialize(deserializer)? {
            0 => Ok(Bit::Zero),
            1 => Ok(Bit::One),
            other => Err(serde::de::Error::custom(format!("invalid bit value: {}", other))),
        }
    }
}

impl From<bool> for Bit {
    fn from(value: bool) -> Self {
        Bit::from_bool(value)
    }
}

impl From<Bit> for u8 {
    fn from(bit: Bit) -> Self {
        bit.to_u8()
    }
}

impl From<Bit> for bool {
    fn from(bit: Bit) -> Self {
        bit.is_one()
    }
}
