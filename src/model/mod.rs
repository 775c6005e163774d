//! Plot state: palette input, settings, colors, and the animated swatch/connection entities.

/// RGB and HSL colors.
pub mod color;
/// Per-screenshot grouping entities.
pub mod connection;
/// Plot layout derived from the canvas size.
pub mod geometry;
/// Palette extractor input.
pub mod palette;
/// Plot configuration and its shared handle.
pub mod settings;
/// Per-color entities.
pub mod swatch;
