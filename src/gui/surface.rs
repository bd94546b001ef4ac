//! Drawing primitives the figure needs from its host.
//!
//! Angles are in degrees and grow clockwise, matching a y-down surface.

use cairo::{Context, LineCap};
use palette::Srgba;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub width: f64,
    pub color: Srgba<f64>,
}

pub trait Surface {
    type Error: std::error::Error;

    fn save(&self) -> Result<(), Self::Error>;
    fn restore(&self) -> Result<(), Self::Error>;
    fn translate(&self, dx: f64, dy: f64);
    fn rotate(&self, degrees: f64);
    /// Round-capped stroke used by every following line and arc.
    fn set_stroke(&self, stroke: &Stroke);
    fn fill(&self, color: Srgba<f64>) -> Result<(), Self::Error>;
    fn line(&self, from: Point, to: Point) -> Result<(), Self::Error>;
    fn arc(
        &self,
        center: Point,
        radius: f64,
        start_degrees: f64,
        sweep_degrees: f64,
    ) -> Result<(), Self::Error>;
}

impl Surface for Context {
    type Error = cairo::Error;

    fn save(&self) -> Result<(), cairo::Error> {
        Context::save(self)
    }

    fn restore(&self) -> Result<(), cairo::Error> {
        Context::restore(self)
    }

    fn translate(&self, dx: f64, dy: f64) {
        Context::translate(self, dx, dy);
    }

    fn rotate(&self, degrees: f64) {
        Context::rotate(self, degrees.to_radians());
    }

    fn set_stroke(&self, stroke: &Stroke) {
        let (r, g, b, a) = stroke.color.into_components();
        self.set_source_rgba(r, g, b, a);
        self.set_line_width(stroke.width);
        self.set_line_cap(LineCap::Round);
    }

    fn fill(&self, color: Srgba<f64>) -> Result<(), cairo::Error> {
        Context::save(self)?;
        let (r, g, b, a) = color.into_components();
        self.set_source_rgba(r, g, b, a);
        let painted = self.paint();
        Context::restore(self)?;
        painted
    }

    fn line(&self, from: Point, to: Point) -> Result<(), cairo::Error> {
        self.move_to(from.x, from.y);
        self.line_to(to.x, to.y);
        self.stroke()
    }

    fn arc(
        &self,
        center: Point,
        radius: f64,
        start_degrees: f64,
        sweep_degrees: f64,
    ) -> Result<(), cairo::Error> {
        // an empty path with round caps would still leave a dot
        if sweep_degrees <= 0.0 {
            return Ok(());
        }
        let start = start_degrees.to_radians();
        self.new_sub_path();
        Context::arc(
            self,
            center.x,
            center.y,
            radius,
            start,
            start + sweep_degrees.to_radians(),
        );
        self.stroke()
    }
}
