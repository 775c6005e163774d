use std::f64::consts::TAU;

use crate::foundation::core::{Canvas, Point};

/// Fixed layout of one square plot: its center and the radius of the plotting interior.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotGeometry {
    /// Surface dimensions.
    pub canvas: Canvas,
    /// Whole-pixel center of the surface.
    pub center: Point,
    /// Interior radius: half the side minus a 5% padding.
    pub max_magnitude: f64,
}

impl PlotGeometry {
    /// Layout for a square surface of side `size` pixels.
    pub fn for_canvas_size(size: u32) -> Self {
        let padding = (f64::from(size) * 0.05).floor() as u32;
        let half = size / 2;
        Self {
            canvas: Canvas::square(size),
            center: Point::new(f64::from(half), f64::from(half)),
            max_magnitude: f64::from(half.saturating_sub(padding)),
        }
    }

    /// Point at `magnitude` from the center along the direction of `hue` degrees.
    pub fn polar(&self, hue: f64, magnitude: f64) -> Point {
        let rads = hue / 360.0 * TAU;
        Point::new(
            rads.cos() * magnitude + self.center.x,
            rads.sin() * magnitude + self.center.y,
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/geometry.rs"]
mod tests;
