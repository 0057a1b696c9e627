use std::error::Error;
use std::fmt::{Display, Formatter};

/// The ways a numeric NACA designation can fail to describe a standard section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InvalidDesignation {
    /// The designation must be a positive integer.
    NonPositive,

    /// The designation had a digit count other than 4 or 5.
    UnsupportedDigitCount(u32),

    /// A 5-digit designation whose camber-position code is not one of the five values for which
    /// a standard camber line is defined. Carries the position fraction that was requested.
    UndefinedCamberCode(f64),
}

impl Display for InvalidDesignation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidDesignation::NonPositive => {
                write!(f, "designation must be a positive integer")
            }
            InvalidDesignation::UnsupportedDigitCount(d) => {
                write!(f, "unsupported designation format with {} digits, expected 4 or 5", d)
            }
            InvalidDesignation::UndefinedCamberCode(p) => {
                write!(f, "no standard camber line is defined for position p = {}", p)
            }
        }
    }
}

impl Error for InvalidDesignation {}
