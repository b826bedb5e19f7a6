//! Positional path data.
//!
//! A [`Path`] is an ordered list of [`PathSegment`]s that always starts with a
//! `MoveTo`. Whether the outline is closed is a rendering concern carried by
//! [`crate::scene::PathStyle`], not by the path itself.

use crate::types::Point;

/// One drawing command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    MoveTo(Point),
    /// Cubic Bézier: two control points, then the endpoint.
    CurveTo(Point, Point, Point),
    LineTo(Point),
}

/// Segment kind without coordinates, for structural comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    MoveTo,
    CurveTo,
    LineTo,
}

impl PathSegment {
    pub fn kind(&self) -> SegmentKind {
        match self {
            PathSegment::MoveTo(_) => SegmentKind::MoveTo,
            PathSegment::CurveTo(..) => SegmentKind::CurveTo,
            PathSegment::LineTo(_) => SegmentKind::LineTo,
        }
    }

    /// The point the pen ends on.
    pub fn end(&self) -> Point {
        match *self {
            PathSegment::MoveTo(p) | PathSegment::LineTo(p) => p,
            PathSegment::CurveTo(_, _, p) => p,
        }
    }

    /// Apply `f` to every coordinate, control points included.
    pub fn map(self, f: impl Fn(Point) -> Point) -> PathSegment {
        match self {
            PathSegment::MoveTo(p) => PathSegment::MoveTo(f(p)),
            PathSegment::CurveTo(c1, c2, p) => PathSegment::CurveTo(f(c1), f(c2), f(p)),
            PathSegment::LineTo(p) => PathSegment::LineTo(f(p)),
        }
    }
}

/// An ordered segment list beginning with `MoveTo`.
///
/// Built through the fluent methods below:
///
/// ```
/// use kolamru::{Path, pt};
///
/// let path = Path::new(pt(0.0, 0.0))
///     .line_to(pt(1.0, 0.0))
///     .curve_to(pt(1.5, 0.0), pt(2.0, 0.5), pt(2.0, 1.0));
/// assert_eq!(path.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    segments: Vec<PathSegment>,
}

impl Path {
    /// Start a path at `start`.
    pub fn new(start: Point) -> Self {
        Self {
            segments: vec![PathSegment::MoveTo(start)],
        }
    }

    pub fn with_capacity(start: Point, capacity: usize) -> Self {
        let mut segments = Vec::with_capacity(capacity.max(1));
        segments.push(PathSegment::MoveTo(start));
        Self { segments }
    }

    pub fn move_to(mut self, p: Point) -> Self {
        self.segments.push(PathSegment::MoveTo(p));
        self
    }

    pub fn line_to(mut self, p: Point) -> Self {
        self.segments.push(PathSegment::LineTo(p));
        self
    }

    pub fn curve_to(mut self, c1: Point, c2: Point, p: Point) -> Self {
        self.segments.push(PathSegment::CurveTo(c1, c2, p));
        self
    }

    pub(crate) fn push(&mut self, segment: PathSegment) {
        self.segments.push(segment);
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Number of segments (never zero).
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn start(&self) -> Point {
        self.segments[0].end()
    }

    pub fn end(&self) -> Point {
        self.segments[self.segments.len() - 1].end()
    }

    /// Every coordinate in order, flattening each `CurveTo` into its
    /// control points followed by its endpoint.
    pub fn vertices(&self) -> Vec<Point> {
        let mut out = Vec::with_capacity(self.segments.len() * 3);
        for seg in &self.segments {
            match *seg {
                PathSegment::MoveTo(p) | PathSegment::LineTo(p) => out.push(p),
                PathSegment::CurveTo(c1, c2, p) => out.extend([c1, c2, p]),
            }
        }
        out
    }

    /// One code per vertex, in the same order as [`Path::vertices`]: each
    /// `CurveTo` contributes three `CurveTo` codes.
    pub fn vertex_kinds(&self) -> Vec<SegmentKind> {
        let mut out = Vec::with_capacity(self.segments.len() * 3);
        for seg in &self.segments {
            let kind = seg.kind();
            let n = if kind == SegmentKind::CurveTo { 3 } else { 1 };
            out.extend(std::iter::repeat_n(kind, n));
        }
        out
    }

    pub fn kinds(&self) -> impl Iterator<Item = SegmentKind> + '_ {
        self.segments.iter().map(PathSegment::kind)
    }

    /// Apply `f` to every coordinate, keeping segment order and kinds.
    pub fn map_points(&self, f: impl Fn(Point) -> Point) -> Path {
        Path {
            segments: self.segments.iter().map(|s| s.map(&f)).collect(),
        }
    }

    pub fn is_finite(&self) -> bool {
        self.vertices().iter().all(|p| p.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::pt;

    #[test]
    fn starts_with_move_to() {
        let path = Path::new(pt(1.0, 2.0));
        assert_eq!(path.len(), 1);
        assert_eq!(path.segments()[0], PathSegment::MoveTo(pt(1.0, 2.0)));
        assert_eq!(path.start(), path.end());
    }

    #[test]
    fn vertices_flatten_curves() {
        let path = Path::new(pt(0.0, 0.0))
            .curve_to(pt(1.0, 0.0), pt(1.0, 1.0), pt(0.0, 1.0))
            .line_to(pt(0.0, 0.0));
        assert_eq!(
            path.vertices(),
            vec![
                pt(0.0, 0.0),
                pt(1.0, 0.0),
                pt(1.0, 1.0),
                pt(0.0, 1.0),
                pt(0.0, 0.0)
            ]
        );
        assert_eq!(path.end(), pt(0.0, 0.0));
    }

    #[test]
    fn map_points_keeps_structure() {
        let path = Path::new(pt(1.0, 1.0))
            .curve_to(pt(2.0, 1.0), pt(2.0, 2.0), pt(1.0, 2.0))
            .move_to(pt(0.0, 0.0))
            .line_to(pt(3.0, 3.0));
        let shifted = path.map_points(|p| p + pt(10.0, 0.0));
        assert!(path.kinds().eq(shifted.kinds()));
        assert_eq!(shifted.start(), pt(11.0, 1.0));
        assert_eq!(
            shifted.segments()[1],
            PathSegment::CurveTo(pt(12.0, 1.0), pt(12.0, 2.0), pt(11.0, 2.0))
        );
    }

    #[test]
    fn detects_non_finite() {
        let path = Path::new(pt(0.0, 0.0)).line_to(pt(f64::NAN, 0.0));
        assert!(!path.is_finite());
    }
}
