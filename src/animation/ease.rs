use crate::foundation::core::Point;

/// Fraction of the remaining distance covered by one easing step.
pub const DAMPING: f64 = 0.15;
/// Per-axis distance under which a point counts as arrived.
pub const POINT_TOLERANCE: f64 = 0.1;
/// Distance under which a scalar counts as arrived.
pub const SCALAR_TOLERANCE: f64 = 0.01;

/// A value that can be eased toward a destination one damped step at a time.
///
/// Every implementation guarantees that repeated stepping toward a fixed destination never
/// increases the distance to it, and lands on the destination exactly after finitely many steps.
pub trait Approach: Copy {
    /// Whether `self` is within tolerance of `dest`.
    fn converged(self, dest: Self) -> bool;

    /// Whether the value is usable as an interpolation origin.
    fn is_valid_origin(self) -> bool;

    /// Move `DAMPING` of the way toward `dest` without snapping.
    fn damped_step(self, dest: Self) -> Self;

    /// One easing step from `current` toward `dest`.
    ///
    /// An unset (or non-finite) origin snaps straight to `dest`, as does an origin already within
    /// tolerance.
    fn step_toward(current: Option<Self>, dest: Self) -> Self {
        let Some(current) = current.filter(|c| c.is_valid_origin()) else {
            return dest;
        };
        if current.converged(dest) {
            return dest;
        }
        let next = current.damped_step(dest);
        if next.converged(dest) { dest } else { next }
    }
}

impl Approach for f64 {
    fn converged(self, dest: Self) -> bool {
        self == dest || (self - dest).abs() < SCALAR_TOLERANCE
    }

    fn is_valid_origin(self) -> bool {
        self.is_finite()
    }

    fn damped_step(self, dest: Self) -> Self {
        self + (dest - self) * DAMPING
    }
}

impl Approach for Point {
    fn converged(self, dest: Self) -> bool {
        self == dest
            || ((self.x - dest.x).abs() <= POINT_TOLERANCE
                && (self.y - dest.y).abs() <= POINT_TOLERANCE)
    }

    fn is_valid_origin(self) -> bool {
        self.is_finite()
    }

    fn damped_step(self, dest: Self) -> Self {
        self + (dest - self) * DAMPING
    }
}

/// One easing step for a 2D position.
///
/// An unset origin, or one with a non-finite coordinate, snaps straight to `dest`.
pub fn step_point(current: Option<Point>, dest: Point) -> Point {
    Point::step_toward(current, dest)
}

/// One easing step for a scalar such as a radius.
pub fn step_scalar(current: Option<f64>, dest: f64) -> f64 {
    f64::step_toward(current, dest)
}

/// Whether an optional current value has arrived at `dest`.
///
/// An unset value has not arrived: it still needs the bootstrap frame.
pub fn has_arrived<T: Approach>(current: Option<T>, dest: T) -> bool {
    current.is_some_and(|c| c.converged(dest))
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
