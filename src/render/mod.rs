//! Drawing surfaces and the plot's background layers.

/// Rendered frame buffers.
pub mod backend;
/// `vello_cpu` raster surface.
pub mod cpu;
/// Surface trait and the recording surface.
pub mod surface;
/// Hue wheel background.
pub mod wheel;
