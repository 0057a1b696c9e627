//! Evaluation of the mean camber line and its local slope angle for both standard series.

use super::{ChordwiseGrid, SeriesParams};
use crate::Point2;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// The mean camber line of a section, stored as parallel sequences of chordwise station, camber
/// ordinate, and local slope angle, aligned index-for-index with the grid it was evaluated over.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CamberLine {
    x: Vec<f64>,
    y: Vec<f64>,
    theta: Vec<f64>,
}

impl CamberLine {
    /// Evaluate the camber line for the given series parameters over a chordwise grid,
    /// dispatching to the 4-digit or 5-digit formula.
    pub fn evaluate(series: &SeriesParams, grid: &ChordwiseGrid) -> Self {
        match *series {
            SeriesParams::FourDigit { m, p } => four_digit(m, p, grid),
            SeriesParams::FiveDigit { m, k1, .. } => five_digit(m, k1, grid),
        }
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// The local slope angle of the camber line at each station, in radians.
    pub fn theta(&self) -> &[f64] {
        &self.theta
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// The camber line as a point sequence.
    pub fn points(&self) -> Vec<Point2> {
        self.x
            .iter()
            .zip(&self.y)
            .map(|(&x, &y)| Point2::new(x, y))
            .collect()
    }
}

/// The 4-digit camber line. The ordinate is the standard pair of parabolic arcs meeting at the
/// maximum camber station; the slope angle is taken by finite difference between consecutive
/// stations, with the final station replicating the penultimate slope so the sequences stay
/// aligned with the grid.
///
/// A section with `p = 0` or `m = 0` has no camber; both parabolic branches degenerate, so the
/// line is pinned to zero everywhere rather than dividing by zero.
fn four_digit(m: f64, p: f64, grid: &ChordwiseGrid) -> CamberLine {
    let x: Vec<f64> = grid.values().to_vec();
    let split = grid.split();

    let y: Vec<f64> = if m == 0.0 || p == 0.0 {
        vec![0.0; x.len()]
    } else {
        x.iter()
            .map(|&x| {
                if x <= split {
                    m / (p * p) * (2.0 * p * x - x * x)
                } else {
                    m / ((1.0 - p) * (1.0 - p)) * ((1.0 - 2.0 * p) + 2.0 * p * x - x * x)
                }
            })
            .collect()
    };

    // Finite-difference slope. The duplicated station at the sub-range boundary produces a
    // zero-width interval; it carries the previous slope forward instead of a 0/0 angle.
    let mut theta: Vec<f64> = Vec::with_capacity(x.len());
    for ((x0, y0), (x1, y1)) in x.iter().zip(&y).tuple_windows() {
        let dx = x1 - x0;
        let angle = if dx > 0.0 {
            ((y1 - y0) / dx).atan()
        } else {
            theta.last().copied().unwrap_or(0.0)
        };
        theta.push(angle);
    }
    theta.push(theta.last().copied().unwrap_or(0.0));

    CamberLine { x, y, theta }
}

/// The 5-digit camber line: a cubic forward branch handing over to a linear aft branch at the
/// station `x = m`, where the two polynomials meet exactly. Both branches have closed-form
/// derivatives, so the slope angle is analytic rather than finite-difference.
fn five_digit(m: f64, k1: f64, grid: &ChordwiseGrid) -> CamberLine {
    let x: Vec<f64> = grid.values().to_vec();

    let mut y = Vec::with_capacity(x.len());
    let mut theta = Vec::with_capacity(x.len());
    for &x in &x {
        let (ordinate, slope) = if x <= m {
            (
                k1 / 6.0 * (x.powi(3) - 3.0 * m * x * x + m * m * (3.0 - m) * x),
                k1 / 6.0 * (3.0 * x * x - 6.0 * m * x + m * m * (3.0 - m)),
            )
        } else {
            (k1 * m.powi(3) / 6.0 * (1.0 - x), -k1 * m.powi(3) / 6.0)
        };
        y.push(ordinate);
        theta.push(slope.atan());
    }

    CamberLine { x, y, theta }
}
