//! Generation of the chordwise sample grid that the camber and thickness evaluators share.

use super::SeriesParams;
use crate::common::stepped_space;
use serde::{Deserialize, Serialize};

/// The reference sample steps for each series. The forward sub-range, upstream of the maximum
/// camber station, is sampled an order of magnitude finer than the aft sub-range to capture the
/// curvature concentrated there.
const FOUR_DIGIT_STEPS: (f64, f64) = (1.0e-5, 1.0e-4);
const FIVE_DIGIT_STEPS: (f64, f64) = (1.0e-6, 1.0e-5);

/// An ordered sequence of chordwise x-stations over `[0, chord]`, partitioned at the maximum
/// camber station into a fine forward sub-range and a coarser aft sub-range. The two sub-ranges
/// share their boundary station, so that sample appears twice; downstream evaluators tolerate
/// the zero-width interval.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChordwiseGrid {
    values: Vec<f64>,
    split: f64,
    chord: f64,
}

impl ChordwiseGrid {
    /// Build a grid over `[0, chord]` split at `split`, with the given forward and aft sample
    /// steps. The forward sub-range ends exactly at the split station and the aft sub-range
    /// begins there. A split of zero degenerates the forward sub-range to the single station
    /// `x = 0`.
    ///
    /// # Arguments
    ///
    /// * `split`: the station separating the fine and coarse sub-ranges, in `[0, chord]`
    /// * `chord`: the chord length
    /// * `fine_step`: the sample step of the forward sub-range, must be positive
    /// * `coarse_step`: the sample step of the aft sub-range, must be positive
    ///
    /// returns: ChordwiseGrid
    pub fn new(split: f64, chord: f64, fine_step: f64, coarse_step: f64) -> Self {
        let mut values = stepped_space(0.0, split, fine_step);
        values.extend(stepped_space(split, chord, coarse_step));
        Self {
            values,
            split,
            chord,
        }
    }

    /// Build the grid for a series over `[0, chord]` using the reference sample steps, split at
    /// the series' maximum camber station.
    pub fn for_series(series: &SeriesParams, chord: f64) -> Self {
        let (fine, coarse) = match series {
            SeriesParams::FourDigit { .. } => FOUR_DIGIT_STEPS,
            SeriesParams::FiveDigit { .. } => FIVE_DIGIT_STEPS,
        };
        Self::new(series.max_camber_position() * chord, chord, fine, coarse)
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The station separating the fine forward sub-range from the coarse aft sub-range.
    pub fn split(&self) -> f64 {
        self.split
    }

    pub fn chord(&self) -> f64 {
        self.chord
    }
}
