//! Geometry primitives: sampled arcs, Bézier rounded rectangles, circles,
//! polygons and spokes.
//!
//! Every function here is pure and returns a fresh [`Path`]. Inputs are
//! checked and reported as [`GeometryError`]; callers that validated their
//! configuration up front should never see one.

use std::f64::consts::{FRAC_PI_2, PI, SQRT_2, TAU};

use glam::{DVec2, dvec2};

use crate::errors::GeometryError;
use crate::path::{Path, PathSegment};
use crate::types::Point;

/// Magic constant for approximating a quarter circle with one cubic Bézier.
pub const KAPPA: f64 = 4.0 * (SQRT_2 - 1.0) / 3.0;

/// Sample count used by [`arc`].
pub const ARC_SAMPLES: usize = 100;

/// Which half-plane a semicircular arc bulges into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Start and end angle of the sweep, in radians.
    fn sweep(self) -> (f64, f64) {
        match self {
            Direction::Up => (0.0, PI),
            Direction::Down => (0.0, -PI),
            Direction::Left => (FRAC_PI_2, 3.0 * FRAC_PI_2),
            Direction::Right => (-FRAC_PI_2, FRAC_PI_2),
        }
    }

    /// Direction pointing away from the origin for a site on one of the axes.
    ///
    /// Returns `None` for the origin itself and for sites off both axes.
    pub fn outward(i: i32, j: i32) -> Option<Direction> {
        match (i, j) {
            (0, j) if j > 0 => Some(Direction::Up),
            (0, j) if j < 0 => Some(Direction::Down),
            (i, 0) if i > 0 => Some(Direction::Right),
            (i, 0) if i < 0 => Some(Direction::Left),
            _ => None,
        }
    }
}

fn check_point(p: Point, what: &'static str) -> Result<(), GeometryError> {
    if p.is_finite() {
        Ok(())
    } else {
        Err(GeometryError::NonFinite { what })
    }
}

fn check_radius(radius: f64) -> Result<(), GeometryError> {
    if radius.is_finite() && radius > 0.0 {
        Ok(())
    } else {
        Err(GeometryError::NonPositiveRadius { radius })
    }
}

/// Semicircular arc of [`ARC_SAMPLES`] points around `center`.
pub fn arc(center: Point, radius: f64, direction: Direction) -> Result<Path, GeometryError> {
    arc_with_samples(center, radius, direction, ARC_SAMPLES)
}

/// Semicircular arc sampled uniformly at `samples` angles, endpoints included.
///
/// The first sample becomes a `MoveTo`, the rest `LineTo`s. `Up` and `Down`
/// share both endpoints exactly since their angles are exact negations.
pub fn arc_with_samples(
    center: Point,
    radius: f64,
    direction: Direction,
    samples: usize,
) -> Result<Path, GeometryError> {
    check_point(center, "arc center")?;
    check_radius(radius)?;
    if samples < 2 {
        return Err(GeometryError::TooFewPoints {
            what: "arc",
            min: 2,
            got: samples,
        });
    }

    let (from, to) = direction.sweep();
    let span = to - from;
    let last = (samples - 1) as f64;
    let at = |k: usize| {
        let theta = from + span * (k as f64 / last);
        center + radius * dvec2(theta.cos(), theta.sin())
    };

    let mut path = Path::with_capacity(at(0), samples);
    for k in 1..samples {
        path.push(PathSegment::LineTo(at(k)));
    }
    Ok(path)
}

/// Rounded rectangle centered on `center`, built from four cubic corners.
///
/// The outline starts at the right-middle point `(cx + w/2, cy)` and visits
/// the top, left and bottom sides in turn, returning to the start. Each
/// corner pulls its control points `KAPPA * r` off the straight edge. The
/// result is one `MoveTo` followed by four `CurveTo`s (13 vertices).
///
/// `corner_radius` must lie in `[0, min(w, h) / 2]`; it is never clamped.
pub fn rounded_rectangle(
    center: Point,
    width: f64,
    height: f64,
    corner_radius: f64,
) -> Result<Path, GeometryError> {
    check_point(center, "rectangle center")?;
    if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
        return Err(GeometryError::NonPositiveSize { width, height });
    }
    let max = width.min(height) / 2.0;
    let r = corner_radius;
    if !r.is_finite() || r < 0.0 || r > max {
        return Err(GeometryError::CornerRadiusOutOfRange { radius: r, max });
    }

    let DVec2 { x: cx, y: cy } = center;
    let left = cx - width / 2.0;
    let right = cx + width / 2.0;
    let bottom = cy - height / 2.0;
    let top = cy + height / 2.0;
    let kr = KAPPA * r;

    Ok(Path::with_capacity(dvec2(right, cy), 5)
        // top-right
        .curve_to(dvec2(right, cy + kr), dvec2(right - kr, top), dvec2(right - r, top))
        // top-left
        .curve_to(dvec2(left + r, top), dvec2(left, cy + kr), dvec2(left, cy))
        // bottom-left
        .curve_to(dvec2(left, cy - kr), dvec2(left + kr, bottom), dvec2(left + r, bottom))
        // bottom-right
        .curve_to(dvec2(right - r, bottom), dvec2(right, cy - kr), dvec2(right, cy)))
}

/// Circle approximated by four cubic quarter arcs, starting at `center + (r, 0)`.
pub fn circle(center: Point, radius: f64) -> Result<Path, GeometryError> {
    check_point(center, "circle center")?;
    check_radius(radius)?;

    let k = KAPPA * radius;
    let quarter = |theta: f64| {
        let (s, c) = theta.sin_cos();
        let from = dvec2(c, s);
        let (s2, c2) = (theta + FRAC_PI_2).sin_cos();
        let to = dvec2(c2, s2);
        // tangents at `from` and `to` point along the sweep
        let tangent_from = dvec2(-s, c);
        let tangent_to = dvec2(-s2, c2);
        PathSegment::CurveTo(
            center + from * radius + tangent_from * k,
            center + to * radius - tangent_to * k,
            center + to * radius,
        )
    };

    let mut path = Path::with_capacity(center + dvec2(radius, 0.0), 5);
    for q in 0..4 {
        path.push(quarter(q as f64 * FRAC_PI_2));
    }
    Ok(path)
}

/// Open polyline through `vertices`.
pub fn polygon(vertices: &[Point]) -> Result<Path, GeometryError> {
    let (first, rest) = vertices.split_first().ok_or(GeometryError::TooFewPoints {
        what: "polygon",
        min: 2,
        got: 0,
    })?;
    if rest.is_empty() {
        return Err(GeometryError::TooFewPoints {
            what: "polygon",
            min: 2,
            got: 1,
        });
    }
    for v in vertices {
        check_point(*v, "polygon vertex")?;
    }

    let mut path = Path::with_capacity(*first, vertices.len());
    for v in rest {
        path.push(PathSegment::LineTo(*v));
    }
    Ok(path)
}

/// `count` straight spokes of `length` radiating from `center`, the first
/// along +x and the rest at equal angular steps counter-clockwise.
pub fn spokes(center: Point, length: f64, count: usize) -> Result<Path, GeometryError> {
    check_point(center, "spoke center")?;
    check_radius(length)?;
    if count == 0 {
        return Err(GeometryError::TooFewPoints {
            what: "spokes",
            min: 1,
            got: 0,
        });
    }

    let mut path = Path::with_capacity(center, count * 2);
    for k in 0..count {
        let theta = TAU * k as f64 / count as f64;
        if k > 0 {
            path.push(PathSegment::MoveTo(center));
        }
        path.push(PathSegment::LineTo(center + length * dvec2(theta.cos(), theta.sin())));
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::SegmentKind;
    use crate::types::pt;

    const EPSILON: f64 = 1e-9;

    fn assert_point_eq(actual: Point, expected: Point) {
        assert!(
            (actual - expected).length() < EPSILON,
            "point mismatch: {actual} != {expected}"
        );
    }

    #[test]
    fn arc_has_reference_sample_count() {
        let path = arc(pt(0.0, 0.0), 1.0, Direction::Up).unwrap();
        assert_eq!(path.len(), ARC_SAMPLES);
        assert_eq!(path.segments()[0].kind(), SegmentKind::MoveTo);
        assert!(path.kinds().skip(1).all(|k| k == SegmentKind::LineTo));
    }

    #[test]
    fn arc_up_and_down_share_endpoints() {
        let c = pt(2.0, -1.0);
        let up = arc(c, 0.6, Direction::Up).unwrap();
        let down = arc(c, 0.6, Direction::Down).unwrap();
        assert_point_eq(up.start(), down.start());
        assert_point_eq(up.end(), down.end());
        assert_point_eq(up.start(), pt(2.6, -1.0));
        assert_point_eq(up.end(), pt(1.4, -1.0));

        let mid = ARC_SAMPLES / 2;
        let up_mid = up.segments()[mid].end().y - c.y;
        let down_mid = down.segments()[mid].end().y - c.y;
        assert!(up_mid > 0.0);
        assert!(down_mid < 0.0);
        assert!((up_mid + down_mid).abs() < EPSILON);
    }

    #[test]
    fn arc_left_and_right_bulge_sideways() {
        let left = arc(pt(0.0, 0.0), 1.0, Direction::Left).unwrap();
        let right = arc(pt(0.0, 0.0), 1.0, Direction::Right).unwrap();
        assert_point_eq(left.start(), pt(0.0, 1.0));
        assert_point_eq(left.end(), pt(0.0, -1.0));
        assert_point_eq(right.start(), pt(0.0, -1.0));
        assert_point_eq(right.end(), pt(0.0, 1.0));
        let mid = ARC_SAMPLES / 2;
        assert!(left.segments()[mid].end().x < 0.0);
        assert!(right.segments()[mid].end().x > 0.0);
    }

    #[test]
    fn arc_points_lie_on_the_circle() {
        let c = pt(1.0, 1.0);
        let path = arc_with_samples(c, 0.5, Direction::Right, 7).unwrap();
        assert_eq!(path.len(), 7);
        for p in path.vertices() {
            assert!(((p - c).length() - 0.5).abs() < EPSILON);
        }
    }

    #[test]
    fn arc_rejects_bad_input() {
        assert_eq!(
            arc(pt(0.0, 0.0), 0.0, Direction::Up),
            Err(GeometryError::NonPositiveRadius { radius: 0.0 })
        );
        assert!(arc(pt(f64::NAN, 0.0), 1.0, Direction::Up).is_err());
        assert!(arc_with_samples(pt(0.0, 0.0), 1.0, Direction::Up, 1).is_err());
    }

    #[test]
    fn rounded_rectangle_shape() {
        let path = rounded_rectangle(pt(1.0, 2.0), 4.0, 2.0, 0.5).unwrap();
        assert_eq!(path.len(), 5);
        assert_eq!(path.vertices().len(), 13);
        let codes = path.vertex_kinds();
        assert_eq!(codes.iter().filter(|k| **k == SegmentKind::MoveTo).count(), 1);
        assert_eq!(codes.iter().filter(|k| **k == SegmentKind::CurveTo).count(), 12);
        assert_eq!(path.start(), pt(3.0, 2.0));
        assert_eq!(path.end(), pt(3.0, 2.0));
        assert_eq!(path.segments()[0].kind(), SegmentKind::MoveTo);
        assert!(path.kinds().skip(1).all(|k| k == SegmentKind::CurveTo));

        let kr = KAPPA * 0.5;
        assert_eq!(
            path.segments()[1],
            PathSegment::CurveTo(pt(3.0, 2.0 + kr), pt(3.0 - kr, 3.0), pt(2.5, 3.0))
        );
        // left-middle sits halfway round
        assert_eq!(path.segments()[2].end(), pt(-1.0, 2.0));
    }

    #[test]
    fn rounded_rectangle_stays_in_its_box() {
        let path = rounded_rectangle(pt(0.0, 0.0), 1.0, 1.0, 0.25).unwrap();
        for p in path.vertices() {
            assert!(p.x.abs() <= 0.5 + EPSILON && p.y.abs() <= 0.5 + EPSILON);
        }
    }

    #[test]
    fn rounded_rectangle_radius_bounds() {
        assert!(rounded_rectangle(pt(0.0, 0.0), 1.0, 2.0, 0.0).is_ok());
        assert!(rounded_rectangle(pt(0.0, 0.0), 1.0, 2.0, 0.5).is_ok());
        assert_eq!(
            rounded_rectangle(pt(0.0, 0.0), 1.0, 2.0, 0.6),
            Err(GeometryError::CornerRadiusOutOfRange { radius: 0.6, max: 0.5 })
        );
        assert!(matches!(
            rounded_rectangle(pt(0.0, 0.0), 1.0, 2.0, -0.1),
            Err(GeometryError::CornerRadiusOutOfRange { .. })
        ));
        assert!(matches!(
            rounded_rectangle(pt(0.0, 0.0), 0.0, 2.0, 0.0),
            Err(GeometryError::NonPositiveSize { .. })
        ));
    }

    #[test]
    fn circle_quadrants_hit_the_axes() {
        let c = pt(0.5, -0.5);
        let path = circle(c, 0.4).unwrap();
        assert_eq!(path.len(), 5);
        let ends: Vec<Point> = path.segments().iter().map(|s| s.end()).collect();
        assert_point_eq(ends[0], pt(0.9, -0.5));
        assert_point_eq(ends[1], pt(0.5, -0.1));
        assert_point_eq(ends[2], pt(0.1, -0.5));
        assert_point_eq(ends[3], pt(0.5, -0.9));
        assert_point_eq(ends[4], pt(0.9, -0.5));
        // first control point leaves the start vertically
        match path.segments()[1] {
            PathSegment::CurveTo(c1, _, _) => assert_point_eq(c1, pt(0.9, -0.5 + KAPPA * 0.4)),
            other => panic!("expected a curve, got {other:?}"),
        }
    }

    #[test]
    fn polygon_and_spokes() {
        let diamond = polygon(&[pt(0.0, 1.0), pt(1.0, 0.0), pt(0.0, -1.0), pt(-1.0, 0.0)]).unwrap();
        assert_eq!(diamond.len(), 4);
        assert!(polygon(&[pt(0.0, 0.0)]).is_err());
        assert!(polygon(&[]).is_err());

        let rays = spokes(pt(0.0, 0.0), 0.4, 12).unwrap();
        assert_eq!(rays.len(), 24);
        let tips: Vec<Point> = rays
            .segments()
            .iter()
            .filter(|s| s.kind() == SegmentKind::LineTo)
            .map(|s| s.end())
            .collect();
        assert_eq!(tips.len(), 12);
        assert_point_eq(tips[0], pt(0.4, 0.0));
        assert_point_eq(tips[3], pt(0.0, 0.4));
        for tip in tips {
            assert!((tip.length() - 0.4).abs() < EPSILON);
        }
    }

    #[test]
    fn outward_direction() {
        assert_eq!(Direction::outward(0, 3), Some(Direction::Up));
        assert_eq!(Direction::outward(0, -3), Some(Direction::Down));
        assert_eq!(Direction::outward(3, 0), Some(Direction::Right));
        assert_eq!(Direction::outward(-3, 0), Some(Direction::Left));
        assert_eq!(Direction::outward(0, 0), None);
        assert_eq!(Direction::outward(1, 2), None);
    }
}
