//! Shared primitives: geometry re-exports, frame/canvas types, and the crate error.

/// Geometry, canvas, frame, and color primitives.
pub mod core;
/// Crate error type.
pub mod error;
