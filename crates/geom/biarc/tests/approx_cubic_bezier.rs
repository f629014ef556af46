//! End-to-end approximation of whole curves.

use geom_biarc::{BiArc, CubicBez, MAX_CURVES, Point, approx_cubic_bezier};
use kurbo::ParamCurve as _;

/// Cubic Bézier approximation of the first quadrant of the unit circle.
fn quarter_circle() -> CubicBez {
    const KAPPA: f64 = 0.552_284_749_830_793_4;
    CubicBez::new(
        Point::new(1.0, 0.0),
        Point::new(1.0, KAPPA),
        Point::new(KAPPA, 1.0),
        Point::new(0.0, 1.0),
    )
}

fn s_curve() -> CubicBez {
    CubicBez::new(
        Point::new(0.0, 0.0),
        Point::new(1.0, 2.0),
        Point::new(2.0, -2.0),
        Point::new(3.0, 0.0),
    )
}

/// Worst sampled deviation of one biarc from its share of the whole result,
/// assuming the biarcs partition the source curve's parameter interval
/// proportionally to index (good enough for a smooth single-segment fit).
fn max_deviation(bezier: CubicBez, biarcs: &[BiArc], samples: usize) -> f64 {
    let count = biarcs.len() as f64;
    let mut worst = 0.0_f64;
    for (index, biarc) in biarcs.iter().enumerate() {
        let lower = index as f64 / count;
        let upper = (index as f64 + 1.0) / count;
        let segment = bezier.subsegment(lower..upper);
        for step in 0..=samples {
            let param = step as f64 / samples as f64;
            let deviation = biarc.point_at(param).distance(segment.eval(param));
            worst = worst.max(deviation);
        }
    }
    worst
}

#[test]
fn quarter_circle_stays_within_tolerance() {
    let _ = env_logger::builder().is_test(true).try_init();
    let bezier = quarter_circle();
    let biarcs = approx_cubic_bezier(bezier, 16, 0.01);

    // A quarter circle is nearly circular already; a single biarc fits.
    assert_eq!(biarcs.len(), 1);
    assert!(biarcs.len() < MAX_CURVES, "no cap exhaustion expected");
    assert!(max_deviation(bezier, &biarcs, 16) <= 0.01);
}

#[test]
fn every_biarc_shares_its_transition_point_exactly() {
    for bezier in [quarter_circle(), s_curve()] {
        for biarc in approx_cubic_bezier(bezier, 8, 0.01) {
            assert_eq!(biarc.a1.p2, biarc.a2.p1);
        }
    }
}

#[test]
fn result_interpolates_the_curve_endpoints() {
    let bezier = s_curve();
    let biarcs = approx_cubic_bezier(bezier, 8, 0.01);

    let Some(first) = biarcs.first() else {
        panic!("result should not be empty");
    };
    let Some(last) = biarcs.last() else {
        panic!("result should not be empty");
    };
    assert!(first.point_at(0.0).distance(bezier.p0) < 1e-9);
    assert!(last.point_at(1.0).distance(bezier.p3) < 1e-9);
}

#[test]
fn consecutive_biarcs_are_contiguous() {
    let biarcs = approx_cubic_bezier(s_curve(), 8, 0.005);
    assert!(biarcs.len() >= 2, "the s-curve splits at its inflection");
    for pair in biarcs.windows(2) {
        assert!(pair[0].a2.p2.distance(pair[1].a1.p1) < 1e-9);
    }
}

#[test]
fn approximation_is_deterministic() {
    let first = approx_cubic_bezier(s_curve(), 8, 0.001);
    let second = approx_cubic_bezier(s_curve(), 8, 0.001);
    assert_eq!(first, second);
}

#[test]
fn tighter_tolerance_never_produces_fewer_biarcs() {
    let loose = approx_cubic_bezier(s_curve(), 8, 0.1);
    let tight = approx_cubic_bezier(s_curve(), 8, 0.0001);
    assert!(tight.len() >= loose.len());
}

#[test]
fn unreachable_tolerance_exhausts_the_cap_but_terminates() {
    // No finite subdivision reaches a 1e-18 tolerance; the approximator
    // must stop at the segment cap and accept best-effort biarcs instead
    // of subdividing forever.
    let biarcs = approx_cubic_bezier(s_curve(), 8, 1e-18);
    assert!(!biarcs.is_empty());
    assert!(
        biarcs.len() <= MAX_CURVES,
        "cap overrun: got {}",
        biarcs.len()
    );
}

#[test]
fn coincident_endpoints_terminate() {
    // A closed loop: the endpoints coincide, so the seeding phase bisects
    // instead of solving for inflections.
    let loop_curve = CubicBez::new(
        Point::new(0.0, 0.0),
        Point::new(2.0, 2.0),
        Point::new(-2.0, 2.0),
        Point::new(0.0, 0.0),
    );
    let biarcs = approx_cubic_bezier(loop_curve, 8, 0.01);
    assert!(!biarcs.is_empty());
    assert!(biarcs.len() <= MAX_CURVES);
}

#[test]
fn a_point_curve_yields_an_empty_result() {
    let point_curve = CubicBez::new(
        Point::new(1.0, 1.0),
        Point::new(1.0, 1.0),
        Point::new(1.0, 1.0),
        Point::new(1.0, 1.0),
    );
    assert!(approx_cubic_bezier(point_curve, 4, 0.01).is_empty());
}

#[test]
fn straight_line_controls_are_dropped_as_degenerate() {
    // All four points on one line: the tangent rays are coincident and the
    // reference policy drops the segment rather than inventing arcs.
    let line_curve = CubicBez::new(
        Point::new(0.0, 0.0),
        Point::new(1.0, 1.0),
        Point::new(2.0, 2.0),
        Point::new(3.0, 3.0),
    );
    assert!(approx_cubic_bezier(line_curve, 4, 0.01).is_empty());
}

#[test]
fn parallel_tangents_are_bisected_not_dropped() {
    // Both tangent rays vertical (parallel, not coincident): the segment is
    // bisected until fits become possible.
    let arch = CubicBez::new(
        Point::new(0.0, 0.0),
        Point::new(0.0, 2.0),
        Point::new(3.0, 2.0),
        Point::new(3.0, 0.0),
    );
    let biarcs = approx_cubic_bezier(arch, 8, 0.01);
    assert!(biarcs.len() >= 2);
}

#[test]
fn counterclockwise_winding_gives_positive_sweeps() {
    // Quarter circle from (1, 0) up to (0, 1): counterclockwise, so both
    // sweeps are positive.
    for biarc in approx_cubic_bezier(quarter_circle(), 8, 0.01) {
        assert!(biarc.a1.sweep_angle >= 0.0);
        assert!(biarc.a2.sweep_angle >= 0.0);
    }
}
