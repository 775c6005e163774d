use vello_cpu::kurbo::Shape as _;

use crate::{
    foundation::core::{Canvas, Point, Rgba8},
    foundation::error::PlotResult,
    render::{
        backend::FrameRGBA,
        surface::{DrawSurface, LINE_WIDTH},
    },
};

/// Flattening tolerance for circles and arcs.
const PATH_TOLERANCE: f64 = 0.1;

/// Options for [`CpuSurface`].
#[derive(Debug, Clone, Copy)]
pub struct CpuSurfaceOpts {
    pub(crate) clear_rgba: Rgba8,
}

impl Default for CpuSurfaceOpts {
    fn default() -> Self {
        Self {
            clear_rgba: Rgba8::WHITE,
        }
    }
}

impl CpuSurfaceOpts {
    /// Return options with a different color for [`DrawSurface::clear`].
    pub fn with_clear_rgba(mut self, clear: Rgba8) -> Self {
        self.clear_rgba = clear;
        self
    }
}

/// Raster surface powered by `vello_cpu`.
///
/// Drawing calls are recorded into a render context; [`CpuSurface::read_frame`] rasterizes them.
/// Geometry with non-finite coordinates is skipped.
pub struct CpuSurface {
    canvas: Canvas,
    ctx: vello_cpu::RenderContext,
    pixmap: vello_cpu::Pixmap,
    opts: CpuSurfaceOpts,
}

impl CpuSurface {
    /// Allocate a surface for `canvas`.
    pub fn new(canvas: Canvas, opts: CpuSurfaceOpts) -> PlotResult<Self> {
        let (w, h) = canvas.to_u16()?;
        let mut surface = Self {
            canvas,
            ctx: vello_cpu::RenderContext::new(w, h),
            pixmap: vello_cpu::Pixmap::new(w, h),
            opts,
        };
        surface.clear();
        Ok(surface)
    }

    /// Surface dimensions.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Rasterize everything drawn since the last clear.
    pub fn read_frame(&mut self) -> FrameRGBA {
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut self.pixmap);
        FrameRGBA {
            width: self.canvas.width,
            height: self.canvas.height,
            data: self.pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        }
    }

    fn set_paint(&mut self, color: Rgba8) {
        self.ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
            color.r, color.g, color.b, color.a,
        ));
    }
}

impl DrawSurface for CpuSurface {
    fn clear(&mut self) {
        self.ctx.reset();
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.set_paint(self.opts.clear_rgba);
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(self.canvas.width),
            f64::from(self.canvas.height),
        ));
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba8) {
        if !center.is_finite() || !radius.is_finite() || radius <= 0.0 {
            return;
        }
        let path = vello_cpu::kurbo::Circle::new(point_to_cpu(center), radius)
            .to_path(PATH_TOLERANCE);
        self.set_paint(color);
        self.ctx.fill_path(&path);
    }

    fn stroke_line(&mut self, start: Point, end: Point, color: Rgba8) {
        if !start.is_finite() || !end.is_finite() || start == end {
            return;
        }
        let mut path = vello_cpu::kurbo::BezPath::new();
        path.move_to(point_to_cpu(start));
        path.line_to(point_to_cpu(end));
        self.set_paint(color);
        self.ctx.set_stroke(vello_cpu::kurbo::Stroke::new(LINE_WIDTH));
        self.ctx.stroke_path(&path);
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
        if !center.is_finite() || !radius.is_finite() || radius <= 0.0 || width <= 0.0 {
            return;
        }
        let arc = vello_cpu::kurbo::Arc::new(
            point_to_cpu(center),
            vello_cpu::kurbo::Vec2::new(radius, radius),
            start_angle,
            end_angle - start_angle,
            0.0,
        );
        let path = arc.to_path(PATH_TOLERANCE);
        self.set_paint(color);
        self.ctx.set_stroke(vello_cpu::kurbo::Stroke::new(width));
        self.ctx.stroke_path(&path);
    }
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}
