//! chromaplot animates the color palettes of film screenshots as hue/lightness plots.
//!
//! Every dominant color of a screenshot becomes a *swatch*: a circle placed by hue around a
//! wheel, pushed outward or inward by lightness, and sized by saturation. The swatches of one
//! screenshot are tied together by a *connection* whose center sits at their centroid.
//!
//! # Animation model
//!
//! 1. **Settings** are shared ([`SharedSettings`]) and read fresh at the start of each frame.
//! 2. **Destinations** (where each swatch and connection wants to be) are recomputed every frame
//!    from the settings; they are never stored as authoritative state.
//! 3. **Easing**: current values take one damped step toward their destinations
//!    ([`step_point`], [`step_scalar`]) and snap exactly once within tolerance.
//! 4. **Scheduling**: [`PlotController::draw`] replaces any pending frame with a new one; each
//!    frame reschedules itself until nothing moves.
//!
//! Drawing goes through [`DrawSurface`]: [`CpuSurface`] rasterizes with `vello_cpu`,
//! [`RecordingSurface`] captures calls for inspection.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// Damped easing steps.
pub mod animation;
/// Frame sinks.
pub mod encode;
/// Shared primitives and the crate error.
pub mod foundation;
/// Palette input, settings, and animated entities.
pub mod model;
/// Plot controller and scheduling.
pub mod plot;
/// Drawing surfaces.
pub mod render;

pub use animation::ease::{
    Approach, DAMPING, POINT_TOLERANCE, SCALAR_TOLERANCE, has_arrived, step_point, step_scalar,
};
pub use encode::sink::{FrameSink, InMemorySink, PngSequenceSink, SinkConfig, write_png};
pub use foundation::core::{Canvas, FrameIndex, Point, Rgba8, Vec2};
pub use foundation::error::{PlotError, PlotResult};
pub use model::color::{Hsl, Rgb8};
pub use model::connection::{
    Connection, ConnectionLine, SwatchIndex, build_connections, update_connections,
};
pub use model::geometry::PlotGeometry;
pub use model::palette::{PaletteColor, PaletteSet, Screenshot};
pub use model::settings::{Settings, SharedSettings};
pub use model::swatch::{Swatch, SwatchId, SwatchTarget, build_swatches, update_swatches};
pub use plot::controller::{
    CONNECTION_CIRCLE_COLOR, CONNECTION_LINE_COLOR, FrameReport, PlotController,
};
pub use plot::driver::{DEFAULT_MAX_FRAMES, SettleStats, render_until_settled};
pub use plot::scheduler::{FrameHandle, FrameHost, FrameQueue, FrameQueueStats, RenderLoop};
pub use render::backend::FrameRGBA;
pub use render::cpu::{CpuSurface, CpuSurfaceOpts};
pub use render::surface::{DrawCommand, DrawSurface, LINE_WIDTH, RecordingSurface};
pub use render::wheel::{WHEEL_TICKS, draw_color_wheel};
