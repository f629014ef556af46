//! Circular arcs in center/radius/angle form.

use kurbo::Point;

/// One circular arc of a [`BiArc`](crate::BiArc).
///
/// The endpoints `p1`/`p2` are redundant with center, radius, and angles but
/// kept for fast consumption by path emitters. Immutable value type.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arc {
    /// Center of the circle.
    pub center: Point,
    /// Radius of the circle.
    pub radius: f64,
    /// Start angle in radians, measured from the circle center.
    pub start_angle: f64,
    /// Signed sweep in radians; negative sweeps clockwise.
    pub sweep_angle: f64,
    /// Start point of the arc.
    pub p1: Point,
    /// End point of the arc.
    pub p2: Point,
}

impl Arc {
    pub(crate) const fn new(
        center: Point,
        radius: f64,
        start_angle: f64,
        sweep_angle: f64,
        p1: Point,
        p2: Point,
    ) -> Self {
        Self {
            center,
            radius,
            start_angle,
            sweep_angle,
            p1,
            p2,
        }
    }

    /// True if the arc is traversed clockwise.
    #[inline]
    pub fn is_clockwise(&self) -> bool {
        self.sweep_angle < 0.0
    }

    /// Arc length.
    #[inline]
    pub fn length(&self) -> f64 {
        self.radius * self.sweep_angle.abs()
    }

    /// Point on the arc at `fraction` in [0, 1] of the sweep.
    pub fn point_at(&self, fraction: f64) -> Point {
        let angle = self.start_angle + fraction * self.sweep_angle;
        Point::new(
            self.center.x + self.radius * angle.cos(),
            self.center.y + self.radius * angle.sin(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::FRAC_PI_2;

    #[test]
    fn point_at_traverses_the_sweep() {
        // Counterclockwise quarter of the unit circle.
        let quarter = Arc::new(
            Point::new(0.0, 0.0),
            1.0,
            0.0,
            FRAC_PI_2,
            Point::new(1.0, 0.0),
            Point::new(0.0, 1.0),
        );
        assert!(!quarter.is_clockwise());
        assert!((quarter.length() - FRAC_PI_2).abs() < 1e-12);

        let start = quarter.point_at(0.0);
        let midway = quarter.point_at(0.5);
        let end = quarter.point_at(1.0);
        assert!((start.x - 1.0).abs() < 1e-12 && start.y.abs() < 1e-12);
        let diagonal = (2.0_f64).sqrt() / 2.0;
        assert!((midway.x - diagonal).abs() < 1e-12);
        assert!((midway.y - diagonal).abs() < 1e-12);
        assert!(end.x.abs() < 1e-12 && (end.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn negative_sweep_is_clockwise() {
        let arc = Arc::new(
            Point::new(0.0, 0.0),
            2.0,
            FRAC_PI_2,
            -FRAC_PI_2,
            Point::new(0.0, 2.0),
            Point::new(2.0, 0.0),
        );
        assert!(arc.is_clockwise());
        assert!((arc.length() - 2.0 * FRAC_PI_2).abs() < 1e-12);
    }
}
