//! Point-slope scratch lines for circle-center construction.
//!
//! Only used internally to intersect tangent rays and perpendicular
//! bisectors; a `NaN` slope encodes a vertical line.

use crate::EPSILON;
use kurbo::Point;

/// An infinite line through `point` with the given slope.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Line {
    /// A point the line passes through.
    point: Point,
    /// Slope of the line; `NaN` encodes vertical.
    slope: f64,
}

impl Line {
    /// The line through two points. Coincident points yield a vertical line
    /// through the first point.
    pub(crate) fn through(first: Point, second: Point) -> Self {
        let run = second.x - first.x;
        let slope = if run.abs() < EPSILON {
            f64::NAN
        } else {
            (second.y - first.y) / run
        };
        Self {
            point: first,
            slope,
        }
    }

    /// True if the line is vertical.
    #[inline]
    pub(crate) fn is_vertical(&self) -> bool {
        self.slope.is_nan()
    }

    /// The y-axis intercept. Meaningless for vertical lines.
    #[inline]
    fn intercept(&self) -> f64 {
        self.point.y - self.slope * self.point.x
    }

    /// The y value at the given x. Meaningless for vertical lines.
    #[inline]
    fn y_at(&self, x_value: f64) -> f64 {
        self.point.y + self.slope * (x_value - self.point.x)
    }

    /// True if the two lines have the same direction (including the case
    /// where they are the same line).
    pub(crate) fn is_parallel_to(&self, other: &Self) -> bool {
        if self.is_vertical() || other.is_vertical() {
            return self.is_vertical() && other.is_vertical();
        }
        (self.slope - other.slope).abs() < EPSILON
    }

    /// True if the two lines are the same line.
    pub(crate) fn is_coincident_with(&self, other: &Self) -> bool {
        if !self.is_parallel_to(other) {
            return false;
        }
        if self.is_vertical() {
            (self.point.x - other.point.x).abs() < EPSILON
        } else {
            (self.intercept() - other.intercept()).abs() < EPSILON
        }
    }

    /// Intersection point of two lines, or `None` when parallel.
    pub(crate) fn intersection(&self, other: &Self) -> Option<Point> {
        if self.is_parallel_to(other) {
            return None;
        }
        if self.is_vertical() {
            let x_value = self.point.x;
            return Some(Point::new(x_value, other.y_at(x_value)));
        }
        if other.is_vertical() {
            let x_value = other.point.x;
            return Some(Point::new(x_value, self.y_at(x_value)));
        }
        let x_value = (other.intercept() - self.intercept()) / (self.slope - other.slope);
        Some(Point::new(x_value, self.y_at(x_value)))
    }

    /// The line perpendicular to this one through the given point.
    pub(crate) fn perpendicular_at(&self, point: Point) -> Self {
        let slope = if self.is_vertical() {
            0.0
        } else if self.slope.abs() < EPSILON {
            f64::NAN
        } else {
            -1.0 / self.slope
        };
        Self { point, slope }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intersects_sloped_lines() {
        let rising = Line::through(Point::new(0.0, 0.0), Point::new(1.0, 1.0));
        let falling = Line::through(Point::new(0.0, 2.0), Point::new(1.0, 1.0));
        let Some(crossing) = rising.intersection(&falling) else {
            panic!("lines should intersect");
        };
        assert!((crossing.x - 1.0).abs() < 1e-12);
        assert!((crossing.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn handles_vertical_lines() {
        let vertical = Line::through(Point::new(2.0, 0.0), Point::new(2.0, 5.0));
        assert!(vertical.is_vertical());
        let horizontal = Line::through(Point::new(0.0, 3.0), Point::new(1.0, 3.0));
        let Some(crossing) = vertical.intersection(&horizontal) else {
            panic!("lines should intersect");
        };
        assert_eq!(crossing, Point::new(2.0, 3.0));
    }

    #[test]
    fn detects_parallel_and_coincident_lines() {
        let base = Line::through(Point::new(0.0, 0.0), Point::new(1.0, 1.0));
        let shifted = Line::through(Point::new(0.0, 1.0), Point::new(1.0, 2.0));
        let same = Line::through(Point::new(2.0, 2.0), Point::new(3.0, 3.0));

        assert!(base.is_parallel_to(&shifted));
        assert!(!base.is_coincident_with(&shifted));
        assert!(base.is_coincident_with(&same));
        assert!(base.intersection(&shifted).is_none());
    }

    #[test]
    fn perpendicular_flips_between_vertical_and_horizontal() {
        let vertical = Line::through(Point::new(2.0, 0.0), Point::new(2.0, 5.0));
        let flat = vertical.perpendicular_at(Point::new(2.0, 1.0));
        assert!(!flat.is_vertical());
        let upright = flat.perpendicular_at(Point::new(2.0, 1.0));
        assert!(upright.is_vertical());
    }
}
