//! Biarc construction from endpoints, tangents, and a transition point.

use crate::EPSILON;
use crate::arc::Arc;
use crate::line::Line;
use core::f64::consts::TAU;
use kurbo::{Point, Vec2};

/// Two tangent circular arcs interpolating a start point/tangent and an end
/// point/tangent through a shared transition point.
///
/// Invariant: `a1.p2 == a2.p1` is exactly the transition point, and the two
/// arcs partition the parametric interval proportionally to arc length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BiArc {
    /// Arc from the start point to the transition point.
    pub a1: Arc,
    /// Arc from the transition point to the end point.
    pub a2: Arc,
}

impl BiArc {
    /// Fit a biarc through `p1` and `p2` with the given (unnormalized)
    /// tangent directions, meeting at `transition`.
    ///
    /// Each circle center is the intersection of the perpendicular to the
    /// tangent at the endpoint with the perpendicular bisector of the chord
    /// to the transition point. Both sweeps are normalized to the traversal
    /// direction given by the signed area of (p1, transition, p2).
    pub(crate) fn new(
        p1: Point,
        tangent1: Vec2,
        p2: Point,
        tangent2: Vec2,
        transition: Point,
    ) -> Self {
        let center1 = circle_center(p1, sanitize_tangent(tangent1), transition);
        let center2 = circle_center(p2, sanitize_tangent(tangent2), transition);

        // Signed area of the (p1, transition, p2) triangle; negative means
        // the biarc is traversed clockwise.
        let area = (transition.x - p1.x) * (p2.y - p1.y) - (transition.y - p1.y) * (p2.x - p1.x);
        let clockwise = area < 0.0;

        Self {
            a1: make_arc(center1, p1, transition, clockwise),
            a2: make_arc(center2, transition, p2, clockwise),
        }
    }

    /// Total length of the two arcs.
    #[inline]
    pub fn length(&self) -> f64 {
        self.a1.length() + self.a2.length()
    }

    /// Point on the biarc at `fraction` in [0, 1] of its total length.
    ///
    /// The two arcs split the parameter interval proportionally to their
    /// arc lengths.
    pub fn point_at(&self, fraction: f64) -> Point {
        let first_length = self.a1.length();
        let total_length = first_length + self.a2.length();
        if total_length < EPSILON {
            return self.a1.p1;
        }
        let along = fraction * total_length;
        if along < first_length {
            self.a1.point_at(along / first_length)
        } else {
            let second_length = self.a2.length();
            if second_length < EPSILON {
                self.a2.p2
            } else {
                self.a2.point_at((along - first_length) / second_length)
            }
        }
    }
}

/// Replace a near-zero tangent with a canonical unit tangent so angle math
/// never divides by zero.
fn sanitize_tangent(tangent: Vec2) -> Vec2 {
    if tangent.hypot() < EPSILON {
        Vec2::new(1.0, 0.0)
    } else {
        tangent
    }
}

/// Center of the circle through `on_curve` and `through` that is tangent to
/// `tangent` at `on_curve`.
fn circle_center(on_curve: Point, tangent: Vec2, through: Point) -> Point {
    let tangent_line = Line::through(on_curve, on_curve + tangent);
    let radius_line = tangent_line.perpendicular_at(on_curve);
    let chord = Line::through(on_curve, through);
    let bisector = chord.perpendicular_at(on_curve.midpoint(through));
    // The radius line and the bisector are parallel only when the triangle
    // around the transition point is degenerate; the midpoint keeps the
    // result finite and the deviation check catches the bad fit.
    radius_line
        .intersection(&bisector)
        .unwrap_or_else(|| on_curve.midpoint(through))
}

/// Build one arc from its center and endpoints, normalizing the sweep sign
/// to the biarc's overall traversal direction.
fn make_arc(center: Point, start: Point, end: Point, clockwise: bool) -> Arc {
    let radius = (start - center).hypot();
    let start_angle = (start - center).atan2();
    let end_angle = (end - center).atan2();
    let mut sweep_angle = end_angle - start_angle;
    if clockwise && sweep_angle > 0.0 {
        sweep_angle -= TAU;
    } else if !clockwise && sweep_angle < 0.0 {
        sweep_angle += TAU;
    }
    Arc::new(center, radius, start_angle, sweep_angle, start, end)
}
