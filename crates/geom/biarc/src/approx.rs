//! The recursive-subdivision approximation driver.
//!
//! Subdivision uses an explicit LIFO stack rather than recursion so the
//! segment cap stays trivially enforceable and pathological inputs cannot
//! overflow the call stack. Segments are pushed second-half first so they
//! pop in curve-parameter order.

use crate::EPSILON;
use crate::biarc::BiArc;
use crate::line::Line;
use kurbo::{CubicBez, ParamCurve as _, Point};

/// Hard cap on live segments: accepted plus pending plus the one being
/// refined. Reaching it degrades the result to best effort instead of
/// subdividing forever, so the output never exceeds this many biarcs.
pub const MAX_CURVES: usize = 1024;

/// Approximate a cubic Bézier curve with a sequence of biarcs.
///
/// Every returned [`BiArc`], sampled at `samples_per_segment + 1` evenly
/// spaced parameter values, deviates from its source segment by at most
/// `tolerance` — best effort: once [`MAX_CURVES`] segments exist, the
/// candidate is accepted regardless and the achieved error is logged.
/// Biarcs are returned in curve-parameter order and are contiguous up to
/// the inflection splits.
///
/// `samples_per_segment` below 1 is clamped to 1. `tolerance` must be
/// positive.
pub fn approx_cubic_bezier(
    bezier: CubicBez,
    samples_per_segment: usize,
    tolerance: f64,
) -> Vec<BiArc> {
    debug_assert!(tolerance > 0.0, "tolerance must be positive");
    let samples = samples_per_segment.max(1);

    let mut curves: Vec<BiArc> = Vec::new();
    let mut pending: Vec<CubicBez> = Vec::new();
    seed_segments(&mut pending, bezier);

    while let Some(segment) = pending.pop() {
        // A control point coincident with its endpoint defines no tangent;
        // fall back to the opposite control point.
        let control1 = if segment.p1 == segment.p0 {
            segment.p2
        } else {
            segment.p1
        };
        let control2 = if segment.p2 == segment.p3 {
            segment.p1
        } else {
            segment.p2
        };

        let tangent_ray1 = Line::through(segment.p0, control1);
        let tangent_ray2 = Line::through(segment.p3, control2);

        if tangent_ray1.is_coincident_with(&tangent_ray2) {
            // No meaningful biarc exists; the segment is dropped, which can
            // leave a gap in the output path.
            log::debug!("dropping segment with coincident tangent rays: {segment:?}");
            continue;
        }
        // The popped segment counts against the cap too: a split replaces
        // it with two halves, growing the population by exactly one.
        let live_segments = curves.len() + pending.len() + 1;

        if tangent_ray1.is_parallel_to(&tangent_ray2) {
            if live_segments < MAX_CURVES {
                push_halves(&mut pending, segment, 0.5);
            } else {
                log::warn!("segment cap reached while bisecting parallel tangents");
            }
            continue;
        }
        let Some(apex) = tangent_ray1.intersection(&tangent_ray2) else {
            continue;
        };
        if !apex.is_finite() {
            log::debug!("dropping segment with unstable tangent intersection: {segment:?}");
            continue;
        }

        let transition = incenter(segment.p0, apex, segment.p3);
        let candidate = BiArc::new(
            segment.p0,
            control1 - segment.p0,
            segment.p3,
            segment.p3 - control2,
            transition,
        );

        // Sampled deviation from the source segment; -1 is the "nothing
        // measured yet" sentinel.
        let mut max_distance = -1.0_f64;
        let mut max_param = 0.0_f64;
        for step in 0..=samples {
            let param = step as f64 / samples as f64;
            let distance = candidate.point_at(param).distance(segment.eval(param));
            if distance > max_distance {
                max_distance = distance;
                max_param = param;
            }
        }

        if max_distance > tolerance && live_segments < MAX_CURVES {
            // The worst deviation can land on an endpoint when the fit is
            // degenerate; split in the middle then to guarantee progress.
            let split_at = if max_param <= 0.0 || max_param >= 1.0 {
                0.5
            } else {
                max_param
            };
            push_halves(&mut pending, segment, split_at);
        } else {
            if max_distance > tolerance {
                log::warn!(
                    "segment cap reached; accepting biarc with error {max_distance} over tolerance {tolerance}"
                );
            }
            curves.push(candidate);
        }
    }

    curves
}

/// Split the source curve so every pending segment has monotonic curvature
/// sign, then seed the work stack in parameter order.
fn seed_segments(pending: &mut Vec<CubicBez>, bezier: CubicBez) {
    // Coincident endpoints confuse the inflection solver; bisect instead.
    if bezier.p0 == bezier.p3 {
        push_halves(pending, bezier, 0.5);
        return;
    }
    // An endpoint-coincident control point: treat as inflection-free.
    if bezier.p1 == bezier.p0 || bezier.p2 == bezier.p3 {
        pending.push(bezier);
        return;
    }
    let inflections = inflection_params(&bezier);
    match inflections[..] {
        [first] => push_halves(pending, bezier, first),
        [first, second] => {
            let (head, rest) = subdivide(bezier, first);
            // Reproject the second root onto the remaining segment's local
            // parameter before the second split.
            let reprojected = (second - first) / (1.0 - first);
            let (middle, tail) = subdivide(rest, reprojected);
            pending.push(tail);
            pending.push(middle);
            pending.push(head);
        }
        _ => pending.push(bezier),
    }
}

/// Split `bezier` at `param` and push both halves, first half on top.
fn push_halves(pending: &mut Vec<CubicBez>, bezier: CubicBez, param: f64) {
    let (head, tail) = subdivide(bezier, param);
    pending.push(tail);
    pending.push(head);
}

/// Both halves of `bezier` split at `param`.
fn subdivide(bezier: CubicBez, param: f64) -> (CubicBez, CubicBez) {
    (
        bezier.subsegment(0.0..param),
        bezier.subsegment(param..1.0),
    )
}

/// Parameters in (0, 1) where the curvature changes sign: the real roots of
/// the quadratic formed by the cross products of the derivative basis
/// vectors. At most two.
fn inflection_params(bezier: &CubicBez) -> Vec<f64> {
    let basis_a = bezier.p1 - bezier.p0;
    let basis_b = (bezier.p2 - bezier.p1) - basis_a;
    let basis_c = ((bezier.p3 - bezier.p2) - basis_a) - 2.0 * basis_b;

    let quad_a = basis_b.cross(basis_c);
    let quad_b = basis_a.cross(basis_c);
    let quad_c = basis_a.cross(basis_b);

    let mut roots: Vec<f64> = Vec::new();
    if quad_a.abs() < EPSILON {
        // Degenerates to a linear equation.
        if quad_b.abs() >= EPSILON {
            roots.push(-quad_c / quad_b);
        }
    } else {
        let discriminant = quad_b * quad_b - 4.0 * quad_a * quad_c;
        // A double root touches zero curvature without a sign change and is
        // not an inflection.
        if discriminant > EPSILON {
            let sqrt_discriminant = discriminant.sqrt();
            roots.push((-quad_b - sqrt_discriminant) / (2.0 * quad_a));
            roots.push((-quad_b + sqrt_discriminant) / (2.0 * quad_a));
        }
    }

    roots.retain(|&root| root > EPSILON && root < 1.0 - EPSILON);
    roots.sort_by(f64::total_cmp);
    roots.dedup_by(|second, first| (*second - *first).abs() < EPSILON);
    roots
}

/// Incenter of the triangle (p1, apex, p2): each vertex is weighted by the
/// length of its opposite side.
fn incenter(p1: Point, apex: Point, p2: Point) -> Point {
    let side_opposite_p1 = apex.distance(p2);
    let side_opposite_apex = p1.distance(p2);
    let side_opposite_p2 = p1.distance(apex);
    let perimeter = side_opposite_p1 + side_opposite_apex + side_opposite_p2;
    if perimeter < EPSILON {
        return p1;
    }
    Point::new(
        (side_opposite_p1 * p1.x + side_opposite_apex * apex.x + side_opposite_p2 * p2.x)
            / perimeter,
        (side_opposite_p1 * p1.y + side_opposite_apex * apex.y + side_opposite_p2 * p2.y)
            / perimeter,
    )
}
