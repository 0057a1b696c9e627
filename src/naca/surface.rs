//! Synthesis of the upper and lower surfaces from the camber line and thickness distribution.

use super::{CamberLine, ThicknessDistribution};
use crate::{Point2, Vector2};
use itertools::izip;
use serde::{Deserialize, Serialize};

/// The upper and lower surface coordinates of a section, ordered from leading edge to trailing
/// edge and aligned index-for-index with the grid both inputs were evaluated over.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurfaceCoordinates {
    pub upper: Vec<Point2>,
    pub lower: Vec<Point2>,
}

impl SurfaceCoordinates {
    /// Offset the half-thickness normal to the local camber tangent at every station. This is
    /// the standard construction: with camber `(x, y, theta)` and half-thickness `y_t`,
    ///
    /// * upper: `(x - y_t sin(theta), y + y_t cos(theta))`
    /// * lower: `(x + y_t sin(theta), y - y_t cos(theta))`
    ///
    /// so the surfaces remain correct for cambered sections where the local normal leans away
    /// from vertical.
    ///
    /// # Arguments
    ///
    /// * `camber`: the mean camber line with its local slope angles
    /// * `thickness`: the half-thickness distribution over the same grid
    ///
    /// returns: SurfaceCoordinates
    pub fn offset(camber: &CamberLine, thickness: &ThicknessDistribution) -> Self {
        let mut upper = Vec::with_capacity(camber.len());
        let mut lower = Vec::with_capacity(camber.len());

        for (&x, &y, &theta, &y_t) in
            izip!(camber.x(), camber.y(), camber.theta(), thickness.values())
        {
            let (sin, cos) = theta.sin_cos();
            let normal = Vector2::new(-sin, cos);
            let station = Point2::new(x, y);
            upper.push(station + normal * y_t);
            lower.push(station - normal * y_t);
        }

        Self { upper, lower }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naca::{ChordwiseGrid, Designation};
    use approx::assert_relative_eq;

    fn surfaces_for(designation: &Designation) -> (SurfaceCoordinates, CamberLine) {
        let grid = ChordwiseGrid::new(
            designation.series().max_camber_position(),
            1.0,
            1.0e-3,
            1.0e-2,
        );
        let camber = CamberLine::evaluate(designation.series(), &grid);
        let thickness = ThicknessDistribution::evaluate(designation.thickness(), &grid);
        (SurfaceCoordinates::offset(&camber, &thickness), camber)
    }

    #[test]
    fn symmetric_section_surfaces_mirror_about_the_chord() {
        let d: Designation = "0012".parse().unwrap();
        let (surfaces, _) = surfaces_for(&d);
        for (u, l) in surfaces.upper.iter().zip(&surfaces.lower) {
            assert_eq!(u.x, l.x);
            assert_relative_eq!(u.y, -l.y, epsilon = 1.0e-12);
        }
    }

    #[test]
    fn surfaces_meet_at_the_leading_edge() {
        let d = Designation::parse(2412).unwrap();
        let (surfaces, _) = surfaces_for(&d);
        assert_eq!(surfaces.upper[0], Point2::new(0.0, 0.0));
        assert_eq!(surfaces.lower[0], Point2::new(0.0, 0.0));
    }

    #[test]
    fn thickness_pushes_surfaces_apart_along_the_local_normal() {
        let d = Designation::parse(2412).unwrap();
        let (surfaces, camber) = surfaces_for(&d);

        // Where the camber slope is positive (ahead of the peak), the upper surface leans back
        // and the lower surface leans forward: x_u <= x_c <= x_l.
        for i in 1..camber.len() {
            if camber.theta()[i] < 0.0 {
                break;
            }
            assert!(surfaces.upper[i].x <= camber.x()[i]);
            assert!(surfaces.lower[i].x >= camber.x()[i]);
        }
    }

    #[test]
    fn cambered_surfaces_straddle_the_camber_line() {
        let d = Designation::parse(2412).unwrap();
        let (surfaces, camber) = surfaces_for(&d);
        for i in 1..camber.len() - 1 {
            assert!(surfaces.upper[i].y > camber.y()[i]);
            assert!(surfaces.lower[i].y < camber.y()[i]);
        }
    }
}
