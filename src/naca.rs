//! This module contains the evaluation pipeline for NACA 4-digit and 5-digit standard airfoil
//! sections. A parsed [`Designation`] is expanded over a chordwise sample grid into a camber
//! line, a symmetric half-thickness distribution, and finally the upper and lower surface
//! coordinates, assembled into a [`SectionGeometry`] ready for rendering.
//!
//! Every stage produces an immutable value consumed by the next; nothing in the pipeline
//! depends on a display environment.

mod camber;
mod designation;
mod grid;
mod surface;
mod thickness;

pub use camber::CamberLine;
pub use designation::{Designation, SeriesParams};
pub use grid::ChordwiseGrid;
pub use surface::SurfaceCoordinates;
pub use thickness::ThicknessDistribution;

use crate::{Point2, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The chord length all sections are normalized to.
pub const CHORD: f64 = 1.0;

/// The assembled geometry of an airfoil section: the four point sequences a renderer consumes,
/// along with the designation they were generated from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionGeometry {
    /// The designation the section was generated from.
    pub designation: Designation,

    /// The chord line, a two-point segment from the leading edge to the trailing edge at y = 0.
    pub chord_line: Vec<Point2>,

    /// The upper surface, ordered from leading edge to trailing edge.
    pub upper: Vec<Point2>,

    /// The lower surface, ordered from leading edge to trailing edge.
    pub lower: Vec<Point2>,

    /// The mean camber line, ordered from leading edge to trailing edge.
    pub camber: Vec<Point2>,
}

impl SectionGeometry {
    /// The plot title for this section, embedding the designation zero-padded to five digits.
    pub fn title(&self) -> String {
        format!("NACA {:05} Airfoil Geometry", self.designation.number())
    }

    /// The four curves of the section paired with their display names, in the order a renderer
    /// should present them.
    pub fn curves(&self) -> [(&'static str, &[Point2]); 4] {
        [
            ("Chord line", self.chord_line.as_slice()),
            ("Upper surface", self.upper.as_slice()),
            ("Lower surface", self.lower.as_slice()),
            ("Camber line", self.camber.as_slice()),
        ]
    }
}

/// Evaluate the full section geometry for a designation over a chord normalized to [`CHORD`].
///
/// This is the single-pass pipeline: grid generation, camber evaluation, thickness evaluation,
/// and surface synthesis. The computation is deterministic and pure; the only failure modes are
/// the validation errors produced while parsing the designation.
///
/// # Arguments
///
/// * `designation`: a parsed and validated section designation
///
/// returns: SectionGeometry
///
/// # Examples
///
/// ```
/// use naca_section::naca::{Designation, evaluate};
/// let designation = Designation::parse(2412).unwrap();
/// let section = evaluate(&designation);
/// assert_eq!(section.title(), "NACA 02412 Airfoil Geometry");
/// ```
pub fn evaluate(designation: &Designation) -> SectionGeometry {
    let grid = ChordwiseGrid::for_series(designation.series(), CHORD);
    debug!(
        samples = grid.len(),
        split = grid.split(),
        "generated chordwise grid"
    );

    let camber = CamberLine::evaluate(designation.series(), &grid);
    let thickness = ThicknessDistribution::evaluate(designation.thickness(), &grid);
    let surfaces = SurfaceCoordinates::offset(&camber, &thickness);
    debug!(number = designation.number(), "synthesized section surfaces");

    SectionGeometry {
        designation: *designation,
        chord_line: vec![Point2::new(0.0, 0.0), Point2::new(CHORD, 0.0)],
        upper: surfaces.upper,
        lower: surfaces.lower,
        camber: camber.points(),
    }
}

/// Parse a numeric designation and evaluate its section geometry in one step.
///
/// # Arguments
///
/// * `number`: a positive integer of 4 or 5 digits
///
/// returns: Result<SectionGeometry, Box<dyn Error, Global>>
pub fn evaluate_section(number: u32) -> Result<SectionGeometry> {
    let designation = Designation::parse(number)?;
    Ok(evaluate(&designation))
}
