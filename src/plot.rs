//! Rendering of computed section geometry. The geometry core treats display as an external
//! collaborator: anything that can consume the four point sequences of a [`SectionGeometry`]
//! implements [`SectionRenderer`], and the core never touches a display environment itself.
//!
//! The backend provided here writes a single equal-aspect SVG chart with grid lines, axis labels
//! in chord-fraction units, a legend naming the four curves, and the zero-padded designation in
//! the title.

use crate::common::linear_space;
use crate::naca::SectionGeometry;
use crate::{Point2, Result};
use std::io::Write;
use tracing::debug;

/// A sink for computed section geometry. Implementations consume the chord line, upper surface,
/// lower surface, and camber line point sequences and produce some presentation of them; no
/// computation beyond coordinate mapping belongs here.
pub trait SectionRenderer {
    fn render(&mut self, section: &SectionGeometry) -> Result<()>;
}

/// The stroke styles for the four curves, in the order [`SectionGeometry::curves`] yields them.
const CURVE_STYLES: [(&str, &str); 4] = [
    ("#555555", "6 4"),
    ("#1f77b4", ""),
    ("#d62728", ""),
    ("#2ca02c", "2 3"),
];

/// An equal-aspect 2D plot renderer writing SVG to any `Write` sink.
///
/// The reference grids run to hundreds of thousands of stations, far denser than any display
/// needs, so curves are decimated to a bounded point count before being written. Decimation is
/// a presentation concern only; the computed geometry is never altered.
pub struct SvgPlotRenderer<W> {
    out: W,
    width: f64,
    height: f64,
    max_curve_points: usize,
}

impl<W: Write> SvgPlotRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            width: 1000.0,
            height: 560.0,
            max_curve_points: 2000,
        }
    }

    pub fn with_size(out: W, width: f64, height: f64) -> Self {
        Self {
            out,
            width,
            height,
            max_curve_points: 2000,
        }
    }
}

impl<W: Write> SectionRenderer for SvgPlotRenderer<W> {
    fn render(&mut self, section: &SectionGeometry) -> Result<()> {
        let curves = section.curves();
        let frame = Frame::fit(&curves, self.width, self.height)?;
        debug!(title = %section.title(), "rendering section plot");

        writeln!(
            self.out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}" font-family="sans-serif">"#,
            self.width, self.height
        )?;
        writeln!(
            self.out,
            r#"<rect width="{}" height="{}" fill="white"/>"#,
            self.width, self.height
        )?;

        self.write_grid(&frame)?;
        self.write_title(section)?;

        for ((_, points), (color, dash)) in curves.iter().zip(CURVE_STYLES) {
            let decimated = decimate(points, self.max_curve_points);
            self.write_polyline(&frame, &decimated, color, dash)?;
        }

        self.write_legend(&frame, &curves)?;
        writeln!(self.out, "</svg>")?;
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> SvgPlotRenderer<W> {
    fn write_title(&mut self, section: &SectionGeometry) -> Result<()> {
        writeln!(
            self.out,
            r#"<text x="{}" y="28" text-anchor="middle" font-size="18">{}</text>"#,
            self.width / 2.0,
            section.title()
        )?;
        Ok(())
    }

    fn write_grid(&mut self, frame: &Frame) -> Result<()> {
        for x in frame.x_ticks() {
            let sx = frame.to_screen_x(x);
            writeln!(
                self.out,
                r##"<line x1="{sx:.2}" y1="{:.2}" x2="{sx:.2}" y2="{:.2}" stroke="#dddddd"/>"##,
                frame.top, frame.bottom
            )?;
            writeln!(
                self.out,
                r#"<text x="{sx:.2}" y="{:.2}" text-anchor="middle" font-size="12">{x:.2}</text>"#,
                frame.bottom + 18.0
            )?;
        }
        for y in frame.y_ticks() {
            let sy = frame.to_screen_y(y);
            writeln!(
                self.out,
                r##"<line x1="{:.2}" y1="{sy:.2}" x2="{:.2}" y2="{sy:.2}" stroke="#dddddd"/>"##,
                frame.left, frame.right
            )?;
            writeln!(
                self.out,
                r#"<text x="{:.2}" y="{:.2}" text-anchor="end" font-size="12">{y:.2}</text>"#,
                frame.left - 8.0,
                sy + 4.0
            )?;
        }

        // Frame border and axis captions in chord-fraction units.
        writeln!(
            self.out,
            r##"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="none" stroke="#888888"/>"##,
            frame.left,
            frame.top,
            frame.right - frame.left,
            frame.bottom - frame.top
        )?;
        writeln!(
            self.out,
            r#"<text x="{:.2}" y="{:.2}" text-anchor="middle" font-size="14">x/c</text>"#,
            (frame.left + frame.right) / 2.0,
            frame.bottom + 38.0
        )?;
        writeln!(
            self.out,
            r#"<text x="18" y="{:.2}" text-anchor="middle" font-size="14" transform="rotate(-90 18 {:.2})">y/c</text>"#,
            (frame.top + frame.bottom) / 2.0,
            (frame.top + frame.bottom) / 2.0
        )?;
        Ok(())
    }

    fn write_polyline(
        &mut self,
        frame: &Frame,
        points: &[Point2],
        color: &str,
        dash: &str,
    ) -> Result<()> {
        let mut path = String::with_capacity(points.len() * 16);
        for p in points {
            path.push_str(&format!(
                "{:.2},{:.2} ",
                frame.to_screen_x(p.x),
                frame.to_screen_y(p.y)
            ));
        }
        let dash_attr = if dash.is_empty() {
            String::new()
        } else {
            format!(r#" stroke-dasharray="{dash}""#)
        };
        writeln!(
            self.out,
            r#"<polyline points="{}" fill="none" stroke="{color}" stroke-width="1.5"{dash_attr}/>"#,
            path.trim_end()
        )?;
        Ok(())
    }

    fn write_legend(&mut self, frame: &Frame, curves: &[(&'static str, &[Point2]); 4]) -> Result<()> {
        let x = frame.right - 160.0;
        let mut y = frame.top + 16.0;
        writeln!(
            self.out,
            r##"<rect x="{:.2}" y="{:.2}" width="150" height="{}" fill="white" stroke="#888888"/>"##,
            x - 10.0,
            y - 12.0,
            curves.len() * 18 + 8
        )?;
        for ((name, _), (color, dash)) in curves.iter().zip(CURVE_STYLES) {
            let dash_attr = if dash.is_empty() {
                String::new()
            } else {
                format!(r#" stroke-dasharray="{dash}""#)
            };
            writeln!(
                self.out,
                r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{color}" stroke-width="1.5"{dash_attr}/>"#,
                x,
                y - 4.0,
                x + 28.0,
                y - 4.0
            )?;
            writeln!(
                self.out,
                r#"<text x="{:.2}" y="{:.2}" font-size="12">{name}</text>"#,
                x + 34.0,
                y
            )?;
            y += 18.0;
        }
        Ok(())
    }
}

/// The mapping from chord-fraction coordinates to screen coordinates: an equal-aspect scale
/// fitted to the data bounds with a small pad, centered in the plot area.
struct Frame {
    left: f64,
    right: f64,
    top: f64,
    bottom: f64,
    min_x: f64,
    max_x: f64,
    min_y: f64,
    max_y: f64,
    scale: f64,
}

impl Frame {
    fn fit(curves: &[(&'static str, &[Point2]); 4], width: f64, height: f64) -> Result<Self> {
        let mut min_x = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        for (_, points) in curves {
            for p in *points {
                min_x = min_x.min(p.x);
                max_x = max_x.max(p.x);
                min_y = min_y.min(p.y);
                max_y = max_y.max(p.y);
            }
        }
        if !min_x.is_finite() {
            return Err(Box::from("cannot fit a plot frame to empty geometry"));
        }

        let pad = 0.05 * (max_x - min_x).max(max_y - min_y).max(1.0e-6);
        min_x -= pad;
        max_x += pad;
        min_y -= pad;
        max_y += pad;

        let (left, right) = (70.0, width - 20.0);
        let (top, bottom) = (50.0, height - 50.0);
        let scale = ((right - left) / (max_x - min_x)).min((bottom - top) / (max_y - min_y));

        Ok(Self {
            left,
            right,
            top,
            bottom,
            min_x,
            max_x,
            min_y,
            max_y,
            scale,
        })
    }

    fn to_screen_x(&self, x: f64) -> f64 {
        let slack = (self.right - self.left) - self.scale * (self.max_x - self.min_x);
        self.left + slack / 2.0 + (x - self.min_x) * self.scale
    }

    fn to_screen_y(&self, y: f64) -> f64 {
        let slack = (self.bottom - self.top) - self.scale * (self.max_y - self.min_y);
        self.top + slack / 2.0 + (self.max_y - y) * self.scale
    }

    fn x_ticks(&self) -> Vec<f64> {
        ticks(self.min_x, self.max_x)
    }

    fn y_ticks(&self) -> Vec<f64> {
        ticks(self.min_y, self.max_y)
    }
}

/// Tick positions at a round step chosen so the range holds roughly five to ten of them.
fn ticks(min: f64, max: f64) -> Vec<f64> {
    let step = nice_step(max - min);
    let start = (min / step).ceil() * step;
    let count = ((max - start) / step).floor() as usize + 1;
    if count < 2 {
        return vec![start];
    }
    linear_space(start, start + step * (count - 1) as f64, count)
}

fn nice_step(range: f64) -> f64 {
    let raw = range / 8.0;
    let magnitude = 10.0_f64.powf(raw.log10().floor());
    for multiple in [1.0, 2.0, 5.0] {
        if magnitude * multiple >= raw {
            return magnitude * multiple;
        }
    }
    magnitude * 10.0
}

/// Thin a point sequence to at most `max_points` by stride, always retaining the final point.
fn decimate(points: &[Point2], max_points: usize) -> Vec<Point2> {
    if points.len() <= max_points {
        return points.to_vec();
    }
    let stride = points.len().div_ceil(max_points);
    let mut out: Vec<Point2> = points.iter().step_by(stride).copied().collect();
    if out.last() != points.last() {
        out.push(points[points.len() - 1]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naca::evaluate_section;
    use test_case::test_case;

    fn rendered(number: u32) -> String {
        let section = evaluate_section(number).unwrap();
        let mut buffer = Vec::new();
        SvgPlotRenderer::new(&mut buffer).render(&section).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn svg_contains_title_and_legend() {
        let svg = rendered(2412);
        assert!(svg.contains("NACA 02412 Airfoil Geometry"));
        for name in ["Chord line", "Upper surface", "Lower surface", "Camber line"] {
            assert!(svg.contains(name), "missing legend entry {name}");
        }
    }

    #[test]
    fn svg_has_one_polyline_per_curve() {
        let svg = rendered(23012);
        assert_eq!(svg.matches("<polyline").count(), 4);
    }

    #[test_case(1.0e-6)]
    #[test_case(0.137)]
    #[test_case(3.4)]
    fn nice_step_is_round_and_covers_the_range(range: f64) {
        let step = nice_step(range);
        assert!(step >= range / 8.0);
        assert!(step <= range);
    }

    #[test]
    fn decimation_is_bounded_and_keeps_the_endpoints() {
        let points: Vec<Point2> = (0..10_000)
            .map(|i| Point2::new(i as f64, 0.0))
            .collect();
        let thinned = decimate(&points, 500);
        assert!(thinned.len() <= 502);
        assert_eq!(thinned[0], points[0]);
        assert_eq!(*thinned.last().unwrap(), *points.last().unwrap());
    }
}
