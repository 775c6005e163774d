//! Damped "ease toward" steppers driving every animated value in a plot.

/// Scalar and point easing steps plus convergence checks.
pub mod ease;
