//! Pure 2D geometry shared by the sim and the view adapters
//!
//! `glam::Vec2` already covers the basic vector algebra (add, scale, length,
//! distance, exact component equality); this module holds the operations it
//! lacks: normalization with an explicit zero-vector error and segment
//! intersection predicates.

use glam::Vec2;
use thiserror::Error;

/// Errors from geometric preconditions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MathError {
    #[error("cannot normalize a zero-length vector")]
    ZeroLengthNormalize,
}

/// Normalize `v`, failing when it has no canonical direction.
pub fn normalized(v: Vec2) -> Result<Vec2, MathError> {
    let length = v.length();
    if length == 0.0 {
        return Err(MathError::ZeroLengthNormalize);
    }
    Ok(v / length)
}

/// Relative orientation of the ordered point triple (p, q, r).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Orientation {
    Collinear,
    Clockwise,
    CounterClockwise,
}

fn orientation(p: Vec2, q: Vec2, r: Vec2) -> Orientation {
    let val = (q.y - p.y) * (r.x - q.x) - (q.x - p.x) * (r.y - q.y);
    if val == 0.0 {
        Orientation::Collinear
    } else if val > 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::CounterClockwise
    }
}

/// For collinear p, q, r: does q lie within the extent of segment pr?
fn on_segment(p: Vec2, q: Vec2, r: Vec2) -> bool {
    q.x <= p.x.max(r.x) && q.x >= p.x.min(r.x) && q.y <= p.y.max(r.y) && q.y >= p.y.min(r.y)
}

/// True iff segments p1q1 and p2q2 share at least one point.
///
/// Classic orientation test for general position, with the four collinear
/// special cases (an endpoint lying on the other segment).
pub fn segments_intersect(p1: Vec2, q1: Vec2, p2: Vec2, q2: Vec2) -> bool {
    let o1 = orientation(p1, q1, p2);
    let o2 = orientation(p1, q1, q2);
    let o3 = orientation(p2, q2, p1);
    let o4 = orientation(p2, q2, q1);

    if o1 != o2 && o3 != o4 {
        return true;
    }

    (o1 == Orientation::Collinear && on_segment(p1, p2, q1))
        || (o2 == Orientation::Collinear && on_segment(p1, q2, q1))
        || (o3 == Orientation::Collinear && on_segment(p2, p1, q2))
        || (o4 == Orientation::Collinear && on_segment(p2, q1, q2))
}

/// True iff segment pq touches the axis-aligned box spanning `min`..`max`.
///
/// A segment lying fully inside the box counts as a hit.
pub fn segment_hits_aabb(p: Vec2, q: Vec2, min: Vec2, max: Vec2) -> bool {
    let contains = |v: Vec2| v.x >= min.x && v.x <= max.x && v.y >= min.y && v.y <= max.y;
    if contains(p) || contains(q) {
        return true;
    }
    let corners = [
        Vec2::new(min.x, min.y),
        Vec2::new(max.x, min.y),
        Vec2::new(max.x, max.y),
        Vec2::new(min.x, max.y),
    ];
    (0..4).any(|i| segments_intersect(p, q, corners[i], corners[(i + 1) % 4]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_unit_direction() {
        let v = normalized(Vec2::new(3.0, 4.0)).unwrap();
        assert!((v.length() - 1.0).abs() < 1e-6);
        assert!((v.x - 0.6).abs() < 1e-6);
        assert!((v.y - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_normalized_zero_vector_fails() {
        assert_eq!(
            normalized(Vec2::ZERO),
            Err(MathError::ZeroLengthNormalize)
        );
    }

    #[test]
    fn test_segments_crossing() {
        assert!(segments_intersect(
            Vec2::new(-1.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(0.0, -1.0),
            Vec2::new(0.0, 1.0),
        ));
    }

    #[test]
    fn test_segments_parallel_apart() {
        assert!(!segments_intersect(
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(0.0, 1.0),
            Vec2::new(1.0, 1.0),
        ));
    }

    #[test]
    fn test_segments_collinear_overlapping() {
        assert!(segments_intersect(
            Vec2::new(0.0, 0.0),
            Vec2::new(2.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(3.0, 0.0),
        ));
    }

    #[test]
    fn test_segments_collinear_disjoint() {
        assert!(!segments_intersect(
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(2.0, 0.0),
            Vec2::new(3.0, 0.0),
        ));
    }

    #[test]
    fn test_segments_shared_endpoint() {
        assert!(segments_intersect(
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(2.0, 0.0),
        ));
    }

    #[test]
    fn test_segment_hits_aabb_through() {
        // Crosses the box without either endpoint inside
        assert!(segment_hits_aabb(
            Vec2::new(-10.0, 5.0),
            Vec2::new(20.0, 5.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 10.0),
        ));
    }

    #[test]
    fn test_segment_hits_aabb_inside() {
        assert!(segment_hits_aabb(
            Vec2::new(4.0, 4.0),
            Vec2::new(6.0, 6.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 10.0),
        ));
    }

    #[test]
    fn test_segment_hits_aabb_miss() {
        assert!(!segment_hits_aabb(
            Vec2::new(-10.0, 20.0),
            Vec2::new(20.0, 20.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 10.0),
        ));
    }
}
