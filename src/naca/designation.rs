//! Parsing and decomposition of numeric NACA designations into series parameters.

use crate::Result;
use crate::errors::InvalidDesignation;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The series-specific camber parameters of a standard section, decided once at parse time. The
/// thickness distribution is shared by both series and lives on [`Designation`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SeriesParams {
    /// A 4-digit `MPXX` section.
    FourDigit {
        /// Maximum camber as a fraction of chord, the `M` digit over 100.
        m: f64,
        /// Chordwise position of maximum camber as a fraction of chord, the `P` digit over 10.
        p: f64,
    },

    /// A 5-digit `LPQXX` section.
    FiveDigit {
        /// The camber-line constant from the standard lookup table. This is also the chordwise
        /// station at which the forward cubic hands over to the linear aft branch.
        m: f64,
        /// The lift-scaling constant from the standard lookup table.
        k1: f64,
        /// Chordwise position of maximum camber as a fraction of chord, the `PQ` code over 200.
        p: f64,
    },
}

impl SeriesParams {
    /// The chordwise position of maximum camber as a fraction of chord.
    pub fn max_camber_position(&self) -> f64 {
        match self {
            SeriesParams::FourDigit { p, .. } => *p,
            SeriesParams::FiveDigit { p, .. } => *p,
        }
    }
}

/// A validated NACA designation: the original number, the decomposed series parameters, and the
/// maximum thickness ratio shared by both series.
///
/// Programmatic construction goes through [`Designation::parse`], which takes the designation as
/// an integer and so cannot see leading zeros; symmetric 4-digit sections like 0012 must instead
/// be parsed from their string form via [`FromStr`], which counts the written digits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Designation {
    number: u32,
    series: SeriesParams,
    thickness: f64,
}

impl Designation {
    /// Parse a positive integer of 4 or 5 digits into a validated designation.
    ///
    /// For 5-digit designations the camber-position code must be one of the five values for
    /// which the standard camber line is defined (p in {0.05, 0.10, 0.15, 0.20, 0.25}); any
    /// other code is an [`InvalidDesignation::UndefinedCamberCode`] error rather than a silent
    /// default.
    ///
    /// # Arguments
    ///
    /// * `number`: the designation as a positive integer
    ///
    /// returns: Result<Designation, Box<dyn Error, Global>>
    ///
    /// # Examples
    ///
    /// ```
    /// use naca_section::Designation;
    /// let d = Designation::parse(2412).unwrap();
    /// assert_eq!(d.thickness(), 0.12);
    /// ```
    pub fn parse(number: u32) -> Result<Self> {
        if number == 0 {
            return Err(Box::new(InvalidDesignation::NonPositive));
        }
        Self::with_digit_count(number, number.ilog10() + 1)
    }

    fn with_digit_count(number: u32, digits: u32) -> Result<Self> {
        let thickness = (number % 100) as f64 / 100.0;
        let series = match digits {
            4 => {
                let p = (number / 100 % 10) as f64 / 10.0;
                let m = (number / 1000) as f64 / 100.0;
                SeriesParams::FourDigit { m, p }
            }
            5 => {
                let code = number / 100 % 100;
                let p = code as f64 / 200.0;
                let (m, k1) = camber_constants(code)
                    .ok_or(InvalidDesignation::UndefinedCamberCode(p))?;
                SeriesParams::FiveDigit { m, k1, p }
            }
            d => return Err(Box::new(InvalidDesignation::UnsupportedDigitCount(d))),
        };

        Ok(Self {
            number,
            series,
            thickness,
        })
    }

    /// The designation as originally given.
    pub fn number(&self) -> u32 {
        self.number
    }

    /// The maximum thickness as a fraction of chord, the final two digits over 100.
    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    /// The decomposed series-specific camber parameters.
    pub fn series(&self) -> &SeriesParams {
        &self.series
    }
}

impl FromStr for Designation {
    type Err = Box<dyn std::error::Error>;

    /// Parse a designation from its written form, where leading zeros count toward the digit
    /// total, so that symmetric sections such as "0012" are representable.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Box::new(InvalidDesignation::NonPositive));
        }
        let number: u32 = s
            .parse()
            .map_err(|_| InvalidDesignation::NonPositive)?;
        if number == 0 {
            return Err(Box::new(InvalidDesignation::NonPositive));
        }
        Designation::with_digit_count(number, s.len() as u32)
    }
}

/// The standard 5-digit camber line constants, keyed on the two-digit position code. Only these
/// five codes have a defined standard camber line; anything else is an error upstream.
fn camber_constants(code: u32) -> Option<(f64, f64)> {
    match code {
        10 => Some((0.058, 361.4)),
        20 => Some((0.126, 51.64)),
        30 => Some((0.2025, 15.957)),
        40 => Some((0.29, 6.643)),
        50 => Some((0.391, 3.23)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::Rng;
    use test_case::test_case;

    #[test_case(2412, 0.02, 0.4, 0.12)]
    #[test_case(4415, 0.04, 0.4, 0.15)]
    #[test_case(9999, 0.09, 0.9, 0.99)]
    #[test_case(1001, 0.01, 0.0, 0.01)]
    fn four_digit_decomposition(number: u32, m: f64, p: f64, t: f64) {
        let d = Designation::parse(number).unwrap();
        assert_relative_eq!(d.thickness(), t);
        match d.series() {
            SeriesParams::FourDigit { m: dm, p: dp } => {
                assert_relative_eq!(*dm, m);
                assert_relative_eq!(*dp, p);
            }
            _ => panic!("expected a 4-digit designation"),
        }
    }

    #[test]
    fn four_digit_decomposition_randomized() {
        let mut rng = rand::rng();
        for _ in 0..500 {
            let big_m = rng.random_range(0..=9u32);
            let big_p = rng.random_range(0..=9u32);
            let xx = rng.random_range(1..=99u32);
            let number = big_m * 1000 + big_p * 100 + xx;

            let d: Designation = format!("{:04}", number).parse().unwrap();
            assert_relative_eq!(d.thickness(), xx as f64 / 100.0);
            match d.series() {
                SeriesParams::FourDigit { m, p } => {
                    assert_relative_eq!(*m, big_m as f64 / 100.0);
                    assert_relative_eq!(*p, big_p as f64 / 10.0);
                }
                _ => panic!("expected a 4-digit designation"),
            }
        }
    }

    #[test]
    fn symmetric_section_parses_from_string() {
        let d: Designation = "0012".parse().unwrap();
        assert_eq!(d.number(), 12);
        assert_relative_eq!(d.thickness(), 0.12);
        assert_eq!(
            *d.series(),
            SeriesParams::FourDigit { m: 0.0, p: 0.0 }
        );
    }

    #[test_case(21012, 0.05, 0.058, 361.4)]
    #[test_case(22012, 0.10, 0.126, 51.64)]
    #[test_case(23012, 0.15, 0.2025, 15.957)]
    #[test_case(24012, 0.20, 0.29, 6.643)]
    #[test_case(25012, 0.25, 0.391, 3.23)]
    fn five_digit_lookup(number: u32, p: f64, m: f64, k1: f64) {
        let d = Designation::parse(number).unwrap();
        assert_relative_eq!(d.thickness(), 0.12);
        match d.series() {
            SeriesParams::FiveDigit {
                m: dm,
                k1: dk1,
                p: dp,
            } => {
                assert_eq!(*dm, m);
                assert_eq!(*dk1, k1);
                assert_eq!(*dp, p);
            }
            _ => panic!("expected a 5-digit designation"),
        }
    }

    #[test]
    fn five_digit_undefined_code_is_an_error() {
        let err = Designation::parse(23112).unwrap_err();
        let err = err.downcast::<InvalidDesignation>().unwrap();
        assert_eq!(*err, InvalidDesignation::UndefinedCamberCode(0.155));
    }

    #[test_case(0)]
    #[test_case(123)]
    #[test_case(123456)]
    fn unsupported_formats_are_errors(number: u32) {
        assert!(Designation::parse(number).is_err());
    }

    #[test]
    fn string_form_rejects_short_and_garbage_input() {
        assert!("12".parse::<Designation>().is_err());
        assert!("012".parse::<Designation>().is_err());
        assert!("wing".parse::<Designation>().is_err());
        assert!("-2412".parse::<Designation>().is_err());
    }
}
