use std::fmt;

use crate::{
    animation::ease::{has_arrived, step_point, step_scalar},
    foundation::core::Point,
    model::{
        color::{Hsl, Rgb8},
        geometry::PlotGeometry,
        palette::Screenshot,
        settings::Settings,
    },
};

/// Stable swatch key: the screenshot path plus the color's rank within its palette.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SwatchId(String);

impl SwatchId {
    /// Key for the `rank`-th color of `screenshot`.
    pub fn new(screenshot: &str, rank: usize) -> Self {
        Self(format!("{screenshot}-{rank}"))
    }

    /// Borrow the key text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SwatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One dominant color of one screenshot, plotted as a circle.
#[derive(Clone, Debug, PartialEq)]
pub struct Swatch {
    /// Stable key, unique per `(screenshot, rank)`.
    pub id: SwatchId,
    /// Source color.
    pub rgb: Rgb8,
    /// `rgb` converted once at construction.
    pub hsl: Hsl,
    /// Fraction of the screenshot's pixels matching this color.
    pub amount: f64,
    /// Film the screenshot belongs to.
    pub film: String,
    /// Screenshot path.
    pub screenshot: String,
    /// Current center; unset until the first update.
    pub position: Option<Point>,
    /// Center this frame is easing toward.
    pub dest_position: Option<Point>,
    /// Current radius; unset until the first update.
    pub radius: Option<f64>,
    /// Radius this frame is easing toward.
    pub dest_radius: f64,
}

/// Where a swatch wants to be under a given set of settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwatchTarget {
    /// Destination center.
    pub position: Point,
    /// Destination radius.
    pub radius: f64,
}

impl Swatch {
    /// Compute this swatch's destination from its color, its amount, and `settings`.
    ///
    /// Pure: never reads or writes the animated state.
    pub fn target(&self, settings: &Settings, geometry: &PlotGeometry) -> SwatchTarget {
        let Hsl {
            h: hue,
            s: saturation,
            l: lightness,
        } = self.hsl;

        let mut radius = settings.color_circle_max_size / 3.0;
        if settings.plot_saturation {
            radius = (saturation / 100.0) * (settings.color_circle_max_size - 1.0) + 1.0;
        }
        if settings.color_threshold > 0.0 && self.amount < settings.threshold_fraction() {
            radius = 0.0;
        }

        let magnitude = if settings.plot_lightness {
            geometry.max_magnitude * (1.0 - lightness / 100.0)
        } else {
            geometry.max_magnitude / 2.0
        };

        SwatchTarget {
            position: geometry.polar(hue, magnitude),
            radius,
        }
    }

    /// Recompute the destination and take one easing step toward it.
    pub fn advance(&mut self, settings: &Settings, geometry: &PlotGeometry) {
        let target = self.target(settings, geometry);
        self.dest_position = Some(target.position);
        self.dest_radius = target.radius;
        self.position = Some(step_point(self.position, target.position));
        self.radius = Some(step_scalar(self.radius, target.radius));
    }

    /// Current center, falling back to the destination before the first update.
    pub fn current_position(&self) -> Option<Point> {
        self.position.or(self.dest_position)
    }

    /// Whether position or radius is still short of its destination.
    pub fn is_animating(&self) -> bool {
        let position_settled = match self.dest_position {
            Some(dest) => has_arrived(self.position, dest),
            None => false,
        };
        !position_settled || !has_arrived(self.radius, self.dest_radius)
    }

    /// Paint-order key: smaller keys paint first, so end up underneath.
    fn draw_order_key(&self, settings: &Settings) -> f64 {
        if settings.plot_saturation {
            -self.radius.unwrap_or(self.dest_radius)
        } else {
            self.hsl.s * self.hsl.l
        }
    }
}

/// Expand every screenshot's palette into swatches, preserving screenshot and rank order.
pub fn build_swatches(screenshots: &[Screenshot]) -> Vec<Swatch> {
    screenshots
        .iter()
        .flat_map(|shot| {
            let film = shot.film().to_string();
            shot.colors.iter().enumerate().map(move |(rank, c)| Swatch {
                id: SwatchId::new(&shot.src, rank),
                rgb: c.color,
                hsl: c.color.to_hsl(),
                amount: c.amount,
                film: film.clone(),
                screenshot: shot.src.clone(),
                position: None,
                dest_position: None,
                radius: None,
                dest_radius: 0.0,
            })
        })
        .collect()
}

/// Advance every swatch one frame, then restore paint order.
///
/// With `plotSaturation` the largest circles paint first; otherwise the least saturated and
/// darkest. The sort is stable so equal keys keep their previous relative order.
pub fn update_swatches(swatches: &mut [Swatch], settings: &Settings, geometry: &PlotGeometry) {
    for swatch in swatches.iter_mut() {
        swatch.advance(settings, geometry);
    }
    swatches.sort_by(|a, b| {
        a.draw_order_key(settings)
            .total_cmp(&b.draw_order_key(settings))
    });
}

/// Whether any swatch is still moving.
pub fn any_swatch_animating(swatches: &[Swatch]) -> bool {
    swatches.iter().any(Swatch::is_animating)
}

#[cfg(test)]
#[path = "../../tests/unit/model/swatch.rs"]
mod tests;
