use std::f64::consts::TAU;

use crate::{
    model::{color::Hsl, geometry::PlotGeometry},
    render::surface::DrawSurface,
};

/// Number of hue ticks around the wheel.
pub const WHEEL_TICKS: u32 = 720;
/// Color stops along each tick's lightness gradient.
const GRADIENT_STOPS: u32 = 4;
/// Gap between the plot interior and the hue ring.
const RING_OFFSET: f64 = 8.0;
const RING_WIDTH: f64 = 3.0;
const RING_ALPHA: f64 = 0.8;

/// Paint the hue wheel: a faint lightness gradient per hue tick and a hue ring just outside the
/// plot interior.
///
/// The gradient is drawn as one solid segment per stop, dark toward the rim.
pub fn draw_color_wheel(surface: &mut dyn DrawSurface, geometry: &PlotGeometry, ticks_alpha: f64) {
    let center = geometry.center;
    let size = geometry.max_magnitude;

    for i in 0..WHEEL_TICKS {
        let turn = f64::from(i) / f64::from(WHEEL_TICKS);
        let rads = turn * TAU;
        let end = geometry.polar(turn * 360.0, size);
        let hue = (360.0 * turn).floor();

        for j in 0..GRADIENT_STOPS {
            let from = f64::from(j) / f64::from(GRADIENT_STOPS);
            let to = f64::from(j + 1) / f64::from(GRADIENT_STOPS);
            let lightness = (1.0 - from) * 90.0 + 10.0;
            let color = Hsl::new(hue, 100.0, lightness)
                .to_rgb8()
                .to_rgba8()
                .with_alpha(ticks_alpha);
            surface.stroke_line(center.lerp(end, from), center.lerp(end, to), color);
        }

        let next = f64::from(i + 1) / f64::from(WHEEL_TICKS) * TAU;
        let ring = Hsl::new(hue, 45.0, 50.0)
            .to_rgb8()
            .to_rgba8()
            .with_alpha(RING_ALPHA);
        surface.stroke_arc(center, size + RING_OFFSET, rads, next, RING_WIDTH, ring);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/wheel.rs"]
mod tests;
