use crate::{
    foundation::core::{FrameIndex, Rgba8},
    foundation::error::PlotResult,
    model::{
        connection::{Connection, any_connection_animating, build_connections, update_connections},
        geometry::PlotGeometry,
        palette::Screenshot,
        settings::SharedSettings,
        swatch::{Swatch, any_swatch_animating, build_swatches, update_swatches},
    },
    plot::scheduler::{FrameHandle, FrameHost, FrameQueue, RenderLoop},
    render::{surface::DrawSurface, wheel::draw_color_wheel},
};

/// Connection line color.
pub const CONNECTION_LINE_COLOR: Rgba8 = Rgba8::from_hex(0xefefef);
/// Connection circle color.
pub const CONNECTION_CIRCLE_COLOR: Rgba8 = Rgba8::from_hex(0xcccccc);

/// What one executed frame did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameReport {
    /// Index of the frame just rendered.
    pub frame: FrameIndex,
    /// Whether another frame was scheduled because something is still moving.
    pub animating: bool,
}

/// Animated palette plot for one film.
///
/// Owns the swatch and connection collections and the plot's pending frame. Settings are shared:
/// mutate them, then call [`PlotController::draw`] to animate toward the new layout.
pub struct PlotController<H: FrameHost = FrameQueue> {
    film: String,
    geometry: PlotGeometry,
    settings: SharedSettings,
    swatches: Vec<Swatch>,
    connections: Vec<Connection>,
    host: H,
    render_loop: RenderLoop,
    next_frame: FrameIndex,
}

impl PlotController<FrameQueue> {
    /// Plot `screenshots` of `film`, driven by an in-process [`FrameQueue`].
    pub fn new(
        film: impl Into<String>,
        screenshots: &[Screenshot],
        settings: SharedSettings,
    ) -> PlotResult<Self> {
        Self::with_host(film, screenshots, settings, FrameQueue::new())
    }
}

impl<H: FrameHost> PlotController<H> {
    /// Plot `screenshots` of `film`, scheduling frames on `host`.
    ///
    /// The canvas size is fixed here; a later `canvasSize` change needs a new controller.
    #[tracing::instrument(skip_all, fields(film = tracing::field::Empty))]
    pub fn with_host(
        film: impl Into<String>,
        screenshots: &[Screenshot],
        settings: SharedSettings,
        host: H,
    ) -> PlotResult<Self> {
        let film = film.into();
        tracing::Span::current().record("film", film.as_str());
        settings.borrow().validate()?;
        let geometry = PlotGeometry::for_canvas_size(settings.borrow().canvas_size);

        let swatches = build_swatches(screenshots);
        let connections = build_connections(&swatches);
        tracing::debug!(
            screenshots = screenshots.len(),
            swatches = swatches.len(),
            connections = connections.len(),
            "built plot"
        );

        Ok(Self {
            film,
            geometry,
            settings,
            swatches,
            connections,
            host,
            render_loop: RenderLoop::new(),
            next_frame: FrameIndex(0),
        })
    }

    /// Request a redraw, replacing any frame already pending.
    pub fn draw(&mut self) {
        let handle = self.render_loop.schedule(&mut self.host);
        tracing::debug!(film = %self.film, handle = handle.0, "scheduled frame");
    }

    /// Let the host advance one refresh and run this plot's frame if it is due.
    pub fn tick(&mut self, surface: &mut dyn DrawSurface) -> Option<FrameReport> {
        let mut report = None;
        for handle in self.host.poll_due() {
            if let Some(r) = self.on_frame(handle, surface) {
                report = Some(r);
            }
        }
        report
    }

    /// Frame callback: runs only if `handle` is the plot's pending frame.
    pub fn on_frame(
        &mut self,
        handle: FrameHandle,
        surface: &mut dyn DrawSurface,
    ) -> Option<FrameReport> {
        if !self.render_loop.claim(handle) {
            tracing::trace!(handle = handle.0, "ignored stale frame");
            return None;
        }
        Some(self.render_frame(surface))
    }

    fn render_frame(&mut self, surface: &mut dyn DrawSurface) -> FrameReport {
        let frame = self.next_frame;
        self.next_frame = frame.next();

        surface.clear();

        let settings = self.settings.snapshot();
        update_swatches(&mut self.swatches, &settings, &self.geometry);
        update_connections(
            &mut self.connections,
            &self.swatches,
            &settings,
            &self.geometry,
        );

        let animating =
            any_swatch_animating(&self.swatches) || any_connection_animating(&self.connections);
        if animating {
            self.render_loop.schedule(&mut self.host);
        }

        if settings.show_color_wheel {
            draw_color_wheel(surface, &self.geometry, settings.ticks_alpha);
        }
        self.draw_connections(surface);
        for swatch in &self.swatches {
            if let (Some(position), Some(radius)) = (swatch.position, swatch.radius) {
                surface.fill_circle(position, radius, swatch.rgb.to_rgba8());
            }
        }

        tracing::trace!(film = %self.film, frame = frame.0, animating, "rendered frame");
        FrameReport { frame, animating }
    }

    fn draw_connections(&self, surface: &mut dyn DrawSurface) {
        for connection in &self.connections {
            let Some(center) = connection.position else {
                continue;
            };
            for line in &connection.lines {
                if let Some(end) = line.end {
                    surface.stroke_line(center, end, CONNECTION_LINE_COLOR);
                }
            }
            surface.fill_circle(
                center,
                connection.radius.unwrap_or(0.0),
                CONNECTION_CIRCLE_COLOR,
            );
        }
    }

    /// Whether no frame is pending.
    pub fn is_idle(&self) -> bool {
        self.render_loop.pending().is_none()
    }

    /// Film this plot shows.
    pub fn film(&self) -> &str {
        &self.film
    }

    /// Layout fixed at construction.
    pub fn geometry(&self) -> &PlotGeometry {
        &self.geometry
    }

    /// Settings handle this plot reads every frame.
    pub fn settings(&self) -> &SharedSettings {
        &self.settings
    }

    /// Swatches in current paint order.
    pub fn swatches(&self) -> &[Swatch] {
        &self.swatches
    }

    /// Connections in screenshot order.
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Frame host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Number of frames rendered so far.
    pub fn frames_rendered(&self) -> u64 {
        self.next_frame.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/plot/controller.rs"]
mod tests;
