//! Generation of NACA 4-digit and 5-digit standard airfoil section geometry from a numeric
//! designation. The crate evaluates the closed-form camber line and thickness distribution over
//! a chordwise sample grid, offsets the half-thickness normal to the local camber tangent to
//! produce the upper and lower surfaces, and hands the assembled point sequences to a renderer
//! for display.
//!
//! The geometry core has no dependency on a display environment; rendering is isolated behind
//! the [`plot::SectionRenderer`] trait, with an SVG backend provided in [`plot`].

use std::error::Error;

pub mod common;
pub mod errors;
mod geom2;
pub mod naca;
pub mod plot;

pub type Result<T> = std::result::Result<T, Box<dyn Error>>;

pub use geom2::{Point2, Vector2};
pub use naca::{
    CamberLine, ChordwiseGrid, Designation, SectionGeometry, SeriesParams, SurfaceCoordinates,
    ThicknessDistribution,
};
