//! Frame sinks.
//!
//! Sinks consume rendered frames in render order and are fed by
//! [`crate::render_until_settled`].

/// Frame sink trait and built-in sinks.
pub mod sink;
