use crate::foundation::core::{Point, Rgba8};

/// Stroke width of plain lines, in pixels.
pub const LINE_WIDTH: f64 = 1.0;

/// The drawing operations a plot needs from a 2D surface.
///
/// Implementations hold no plot state: each call renders exactly the geometry it is given.
pub trait DrawSurface {
    /// Wipe the whole surface. Called at the start of every frame.
    fn clear(&mut self);

    /// Filled circle.
    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba8);

    /// One-pixel line segment.
    fn stroke_line(&mut self, start: Point, end: Point, color: Rgba8);

    /// Arc of `radius` around `center`, from `start_angle` to `end_angle` radians, clockwise on
    /// screen.
    fn stroke_arc(
        &mut self,
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        width: f64,
        color: Rgba8,
    );
}

/// A drawing call captured by [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// [`DrawSurface::clear`].
    Clear,
    /// [`DrawSurface::fill_circle`].
    Circle {
        /// Circle center.
        center: Point,
        /// Circle radius.
        radius: f64,
        /// Fill color.
        color: Rgba8,
    },
    /// [`DrawSurface::stroke_line`].
    Line {
        /// Segment start.
        start: Point,
        /// Segment end.
        end: Point,
        /// Stroke color.
        color: Rgba8,
    },
    /// [`DrawSurface::stroke_arc`].
    Arc {
        /// Arc center.
        center: Point,
        /// Arc radius.
        radius: f64,
        /// Start angle in radians.
        start_angle: f64,
        /// End angle in radians.
        end_angle: f64,
        /// Stroke width.
        width: f64,
        /// Stroke color.
        color: Rgba8,
    },
}

/// Surface that records the calls of the most recent frame instead of rasterizing them.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
    clears: u64,
}

impl RecordingSurface {
    /// Empty recording.
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls made since the last clear, the clear included.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of frames started on this surface.
    pub fn clears(&self) -> u64 {
        self.clears
    }
}

impl DrawSurface for RecordingSurface {
    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
        self.clears += 1;
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba8) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn stroke_line(&mut self, start: Point, end: Point, color: Rgba8) {
        self.commands.push(DrawCommand::Line { start, end, color });
    }

    fn stroke_arc(
        &mut self,
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        width: f64,
        color: Rgba8,
    ) {
        self.commands.push(DrawCommand::Arc {
            center,
            radius,
            start_angle,
            end_angle,
            width,
            color,
        });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
