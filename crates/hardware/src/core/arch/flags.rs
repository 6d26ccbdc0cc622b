//! Comparison Flags Register (FL).
//!
//! The LS8 keeps the outcome of the most recent `CMP` in FL. Exactly one of three bits is
//! set after a comparison; before the first comparison FL is clear.

use std::fmt;

/// Bit pattern of the equal flag.
pub const FLAG_EQUAL: u8 = 0b0000_0001;

/// Bit pattern of the greater-than flag.
pub const FLAG_GREATER: u8 = 0b0000_0010;

/// Bit pattern of the less-than flag.
pub const FLAG_LESS: u8 = 0b0000_0100;

/// Outcome of a comparison. Each variant maps to a single FL bit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Flag {
    /// `a == b`.
    Equal,
    /// `a < b`.
    LessThan,
    /// `a > b`.
    GreaterThan,
}

impl Flag {
    /// Orders two register values.
    pub const fn compare(a: u8, b: u8) -> Self {
        if a == b {
            Self::Equal
        } else if a < b {
            Self::LessThan
        } else {
            Self::GreaterThan
        }
    }

    /// Returns the FL register encoding of this flag.
    pub const fn bits(self) -> u8 {
        match self {
            Self::Equal => FLAG_EQUAL,
            Self::LessThan => FLAG_LESS,
            Self::GreaterThan => FLAG_GREATER,
        }
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Equal => write!(f, "E"),
            Self::LessThan => write!(f, "L"),
            Self::GreaterThan => write!(f, "G"),
        }
    }
}
