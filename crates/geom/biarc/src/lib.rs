//! Cubic-Bézier-to-biarc approximation.
//!
//! Converts a cubic Bézier curve into a sequence of [`BiArc`]s — pairs of
//! tangent circular arcs — such that every biarc stays within a caller
//! supplied tolerance of the source curve. Consumers typically serialize
//! each [`Arc`] into a vector-graphics arc command or a plotter stream.
//!
//! The algorithm splits the curve at its inflection points, fits a candidate
//! biarc to each inflection-free segment through the incenter of the
//! tangent-intersection triangle, samples the deviation from the source
//! curve, and subdivides at the point of maximum deviation until the
//! tolerance is met or a hard cap on the number of segments is reached.
//!
//! The whole pipeline is pure and synchronous: no shared state, no I/O, and
//! no errors surfaced to the caller. Geometric degeneracies are absorbed by
//! bisection or segment dropping (reported through the `log` facade).

#![forbid(unsafe_code)]

mod approx;
mod arc;
mod biarc;
mod line;

pub use approx::{MAX_CURVES, approx_cubic_bezier};
pub use arc::Arc;
pub use biarc::BiArc;

// Re-exported so callers construct inputs with the same geometry types.
pub use kurbo::{CubicBez, Point, Vec2};

/// Magnitudes below this are treated as zero in degeneracy checks.
pub(crate) const EPSILON: f64 = 1e-12;
