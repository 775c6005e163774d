use std::convert::Infallible;

use crate::{
    encode::sink::{FrameSink, SinkConfig},
    foundation::core::FrameIndex,
    foundation::error::PlotResult,
    plot::{controller::PlotController, scheduler::FrameHost},
    render::{cpu::CpuSurface, surface::DrawSurface},
};

/// Default refresh budget for one settle run: several seconds of 60 Hz animation.
pub const DEFAULT_MAX_FRAMES: u64 = 600;

/// Outcome of driving a plot until it stops scheduling frames.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SettleStats {
    /// Frames executed during this run.
    pub frames: u64,
    /// Whether the plot went idle before the refresh budget ran out.
    pub converged: bool,
}

impl<H: FrameHost> PlotController<H> {
    /// Tick the host until no frame is pending, for at most `max_refreshes` refreshes.
    ///
    /// Geometry that never converges (non-finite palette numbers) ends the run at the budget.
    pub fn run_until_settled<S: DrawSurface>(
        &mut self,
        surface: &mut S,
        max_refreshes: u64,
    ) -> SettleStats {
        let Ok(stats) = drive(self, surface, max_refreshes, |_, _| Ok::<_, Infallible>(()));
        stats
    }
}

/// Like [`PlotController::run_until_settled`], pushing every rendered frame to `sink`.
pub fn render_until_settled<H: FrameHost>(
    plot: &mut PlotController<H>,
    surface: &mut CpuSurface,
    sink: &mut dyn FrameSink,
    max_refreshes: u64,
) -> PlotResult<SettleStats> {
    let canvas = surface.canvas();
    sink.begin(SinkConfig {
        width: canvas.width,
        height: canvas.height,
    })?;
    let stats = drive(plot, surface, max_refreshes, |surface, frame| {
        sink.push_frame(frame, &surface.read_frame())
    })?;
    sink.end()?;
    Ok(stats)
}

fn drive<H, S, E, F>(
    plot: &mut PlotController<H>,
    surface: &mut S,
    max_refreshes: u64,
    mut on_frame: F,
) -> Result<SettleStats, E>
where
    H: FrameHost,
    S: DrawSurface,
    F: FnMut(&mut S, FrameIndex) -> Result<(), E>,
{
    let mut stats = SettleStats::default();
    let mut refreshes = 0;
    while !plot.is_idle() && refreshes < max_refreshes {
        refreshes += 1;
        if let Some(report) = plot.tick(surface) {
            stats.frames += 1;
            on_frame(surface, report.frame)?;
        }
    }
    stats.converged = plot.is_idle();
    if !stats.converged {
        tracing::warn!(
            film = plot.film(),
            refreshes,
            "plot still animating when the refresh budget ran out"
        );
    }
    Ok(stats)
}

#[cfg(test)]
#[path = "../../tests/unit/plot/driver.rs"]
mod tests;
