//! Evaluation of the standard symmetric thickness distribution, shared by both series.

use super::ChordwiseGrid;
use serde::{Deserialize, Serialize};

/// The half-thickness of a section at each chordwise station, aligned index-for-index with the
/// grid it was evaluated over.
///
/// The standard polynomial closes the leading edge (zero thickness at `x = 0`) but leaves the
/// trailing edge open: its coefficients do not sum to zero, so the thickness at `x = c` is a
/// small nonzero value. That is a property of the standard formula and is preserved as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThicknessDistribution {
    values: Vec<f64>,
}

impl ThicknessDistribution {
    /// Evaluate the distribution for a maximum thickness ratio `t` over a chordwise grid.
    ///
    /// # Arguments
    ///
    /// * `t`: the maximum thickness as a fraction of chord
    /// * `grid`: the chordwise stations to evaluate at
    ///
    /// returns: ThicknessDistribution
    pub fn evaluate(t: f64, grid: &ChordwiseGrid) -> Self {
        let values = grid
            .values()
            .iter()
            .map(|&x| {
                t / 0.2
                    * (0.2969 * x.sqrt() - 0.1260 * x - 0.3516 * x * x + 0.2843 * x.powi(3)
                        - 0.1015 * x.powi(4))
            })
            .collect();
        Self { values }
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
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use test_case::test_case;

    fn distribution(t: f64) -> ThicknessDistribution {
        let grid = ChordwiseGrid::new(0.3, 1.0, 1.0e-3, 1.0e-2);
        ThicknessDistribution::evaluate(t, &grid)
    }

    #[test]
    fn leading_edge_is_closed() {
        let thickness = distribution(0.12);
        assert_eq!(thickness.values()[0], 0.0);
    }

    #[test_case(0.12)]
    #[test_case(0.01)]
    #[test_case(0.99)]
    fn trailing_edge_is_open(t: f64) {
        let thickness = distribution(t);
        let expected = t / 0.2 * (0.2969 - 0.1260 - 0.3516 + 0.2843 - 0.1015);
        let actual = *thickness.values().last().unwrap();
        assert_relative_eq!(actual, expected, epsilon = 1.0e-12);
        assert!(actual > 0.0);
    }

    #[test]
    fn maximum_half_thickness_is_half_of_t_near_thirty_percent_chord() {
        let grid = ChordwiseGrid::new(0.3, 1.0, 1.0e-3, 1.0e-2);
        let thickness = ThicknessDistribution::evaluate(0.12, &grid);
        let (i, max) = thickness
            .values()
            .iter()
            .enumerate()
            .fold((0, f64::MIN), |acc, (i, &v)| {
                if v > acc.1 { (i, v) } else { acc }
            });
        assert_relative_eq!(max, 0.06, epsilon = 1.0e-4);
        assert_relative_eq!(grid.values()[i], 0.3, epsilon = 1.0e-2);
    }
}
