use crate::error::{OperationError, Result};
use crate::math::segment_2d::Segment2;
use crate::math::Point2;

use super::{join_segments, JoinBias};

/// Signed offset distance specification for [`PolylineOffset2D`].
#[derive(Debug, Clone)]
pub enum Offset {
    /// One distance applied at every vertex.
    Uniform(f64),
    /// One distance per vertex; the length must equal the vertex count.
    PerVertex(Vec<f64>),
}

/// Offsets a 2D polyline by a signed, possibly per-vertex distance.
///
/// # Algorithm
///
/// 1. Split the polyline into consecutive segments.
/// 2. Translate segment `i` along its orthogonal, each endpoint by the
///    offset of its vertex — unequal endpoint offsets give the variable
///    width.
/// 3. Join every translated segment to its predecessor at the intersection
///    of their underlying lines, producing a miter where the turn diverges
///    and a clipped corner where it converges. Parallel neighbors are left
///    unjoined.
/// 4. For a closed polyline, join the last segment back to the first the
///    same way.
/// 5. Flatten the segments back into a point sequence with the same vertex
///    count as the input.
///
/// # Sign Convention
///
/// A positive distance offsets to the left of the walking direction, a
/// negative distance to the right.
#[derive(Debug)]
pub struct PolylineOffset2D {
    points: Vec<Point2>,
    offset: Offset,
    closed: bool,
}

impl PolylineOffset2D {
    /// Creates a new polyline offset operation.
    #[must_use]
    pub fn new(points: Vec<Point2>, offset: Offset, closed: bool) -> Self {
        Self {
            points,
            offset,
            closed,
        }
    }

    /// Executes the offset operation.
    ///
    /// Fewer than 2 points offer nothing to offset and are returned
    /// unchanged.
    ///
    /// # Errors
    ///
    /// - [`OperationError::OffsetCountMismatch`] if a per-vertex offset
    ///   array disagrees with the vertex count
    /// - [`crate::error::GeometryError::ZeroVector`] if consecutive points
    ///   coincide (zero-length segment)
    pub fn execute(&self) -> Result<Vec<Point2>> {
        let n = self.points.len();
        if n < 2 {
            return Ok(self.points.clone());
        }

        let offsets = self.resolve_offsets(n)?;
        log::debug!(
            "PolylineOffset2D: offsetting {n} points (closed: {})",
            self.closed
        );

        // Translate and join, accumulating into an owned segment arena;
        // each join rewrites the previous and current entries by index.
        let mut segments: Vec<Segment2> = Vec::with_capacity(n - 1);
        for i in 0..n - 1 {
            let translated = Segment2::new(self.points[i], self.points[i + 1])
                .translated_by(offsets[i], offsets[i + 1])?;

            if let Some(last) = segments.len().checked_sub(1) {
                let (joined_prev, joined_curr) =
                    join_segments(&segments[last], &translated, (JoinBias::Tail, JoinBias::Head));
                segments[last] = joined_prev;
                segments.push(joined_curr);
            } else {
                segments.push(translated);
            }
        }

        if self.closed {
            let last = segments.len() - 1;
            let (joined_tail, joined_head) =
                join_segments(&segments[last], &segments[0], (JoinBias::Tail, JoinBias::Head));
            segments[last] = joined_tail;
            segments[0] = joined_head;
        }

        Ok(flatten_segments(&segments))
    }

    /// Resolves the offset specification into one scalar per vertex.
    fn resolve_offsets(&self, vertex_count: usize) -> Result<Vec<f64>> {
        match &self.offset {
            Offset::Uniform(distance) => Ok(vec![*distance; vertex_count]),
            Offset::PerVertex(distances) => {
                if distances.len() == vertex_count {
                    Ok(distances.clone())
                } else {
                    Err(OperationError::OffsetCountMismatch {
                        expected: vertex_count,
                        actual: distances.len(),
                    }
                    .into())
                }
            }
        }
    }
}

/// Flattens a segment chain back into a point sequence: the first point of
/// the first segment, then the second point of every segment in order.
fn flatten_segments(segments: &[Segment2]) -> Vec<Point2> {
    let mut line = Vec::with_capacity(segments.len() + 1);
    if let Some(first) = segments.first() {
        line.push(first.a);
    }
    line.extend(segments.iter().map(|segment| segment.b));
    line
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn points(values: &[(f64, f64)]) -> Vec<Point2> {
        values.iter().map(|&(x, y)| Point2::new(x, y)).collect()
    }

    fn assert_line_eq(result: &[Point2], expected: &[(f64, f64)], label: &str) {
        assert_eq!(
            result.len(),
            expected.len(),
            "{label}: point count mismatch — got {}, expected {}",
            result.len(),
            expected.len()
        );
        for (i, (r, &(x, y))) in result.iter().zip(expected.iter()).enumerate() {
            assert!(
                (r.x - x).abs() < 1e-9 && (r.y - y).abs() < 1e-9,
                "{label} point {i}: expected ({x}, {y}), got ({}, {})",
                r.x,
                r.y
            );
        }
    }

    /// Staircase hexagonal path used by the ground-truth offset tests.
    fn hex_path() -> Vec<Point2> {
        points(&[
            (0.0, 0.0),
            (0.0, 2.0),
            (2.0, 2.0),
            (2.0, 4.0),
            (4.0, 4.0),
            (4.0, 0.0),
        ])
    }

    #[test]
    fn hex_path_positive_offset() {
        let result = PolylineOffset2D::new(hex_path(), Offset::Uniform(1.0), true)
            .execute()
            .unwrap();
        let expected = [
            (-1.0, 0.0),
            (-1.0, 3.0),
            (1.0, 3.0),
            (1.0, 5.0),
            (5.0, 5.0),
            (5.0, 0.0),
        ];
        assert_line_eq(&result, &expected, "hex offset +1");
    }

    #[test]
    fn hex_path_negative_offset() {
        let result = PolylineOffset2D::new(hex_path(), Offset::Uniform(-1.0), true)
            .execute()
            .unwrap();
        // The concave corner at (2,4)→(4,4) collapses to a repeated point;
        // clipping is lossy there.
        let expected = [
            (1.0, 0.0),
            (1.0, 1.0),
            (3.0, 1.0),
            (3.0, 3.0),
            (3.0, 3.0),
            (3.0, 0.0),
        ];
        assert_line_eq(&result, &expected, "hex offset -1");
    }

    #[test]
    fn geometrically_closed_ring_stays_closed() {
        let mut ring = hex_path();
        ring.push(ring[0]);
        let result = PolylineOffset2D::new(ring, Offset::Uniform(1.0), true)
            .execute()
            .unwrap();
        let expected = [
            (-1.0, -1.0),
            (-1.0, 3.0),
            (1.0, 3.0),
            (1.0, 5.0),
            (5.0, 5.0),
            (5.0, -1.0),
            (-1.0, -1.0),
        ];
        assert_line_eq(&result, &expected, "closed hex offset +1");
        let first = result[0];
        let last = result[result.len() - 1];
        assert!((first - last).norm() < 1e-12, "ring no longer closed");
    }

    #[test]
    fn point_count_is_preserved() {
        let line = hex_path();
        let count = line.len();
        let result = PolylineOffset2D::new(line, Offset::Uniform(0.5), false)
            .execute()
            .unwrap();
        assert_eq!(result.len(), count);
    }

    #[test]
    fn single_segment_is_translated_without_joining() {
        let result = PolylineOffset2D::new(
            points(&[(0.0, 0.0), (4.0, 0.0)]),
            Offset::Uniform(1.0),
            false,
        )
        .execute()
        .unwrap();
        assert_line_eq(&result, &[(0.0, 1.0), (4.0, 1.0)], "single segment");
    }

    #[test]
    fn per_vertex_offsets_vary_the_width() {
        let result = PolylineOffset2D::new(
            points(&[(0.0, 0.0), (2.0, 0.0), (4.0, 0.0)]),
            Offset::PerVertex(vec![1.0, 2.0, 3.0]),
            false,
        )
        .execute()
        .unwrap();
        // Collinear segments never intersect, so each keeps its own
        // translated endpoints.
        assert!((result[0].y - 1.0).abs() < 1e-9);
        assert!((result[1].y - 2.0).abs() < 1e-9);
        assert!((result[2].y - 3.0).abs() < 1e-9);
    }

    #[test]
    fn per_vertex_count_mismatch_fails() {
        let op = PolylineOffset2D::new(
            points(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]),
            Offset::PerVertex(vec![1.0, 2.0]),
            false,
        );
        assert!(op.execute().is_err());
    }

    #[test]
    fn uniform_matches_equivalent_per_vertex() {
        let line = hex_path();
        let uniform = PolylineOffset2D::new(line.clone(), Offset::Uniform(1.0), true)
            .execute()
            .unwrap();
        let per_vertex =
            PolylineOffset2D::new(line, Offset::PerVertex(vec![1.0; 6]), true)
                .execute()
                .unwrap();
        for (u, p) in uniform.iter().zip(per_vertex.iter()) {
            assert!((u - p).norm() < 1e-12);
        }
    }

    #[test]
    fn fewer_than_two_points_returned_unchanged() {
        let single = points(&[(3.0, 4.0)]);
        let result = PolylineOffset2D::new(single.clone(), Offset::Uniform(1.0), false)
            .execute()
            .unwrap();
        assert_eq!(result, single);

        let empty: Vec<Point2> = Vec::new();
        let result = PolylineOffset2D::new(empty, Offset::Uniform(1.0), false)
            .execute()
            .unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn coincident_consecutive_points_fail() {
        let op = PolylineOffset2D::new(
            points(&[(0.0, 0.0), (0.0, 0.0), (1.0, 0.0)]),
            Offset::Uniform(1.0),
            false,
        );
        assert!(op.execute().is_err());
    }

    #[test]
    fn closed_single_segment_self_join_is_a_no_op() {
        let result = PolylineOffset2D::new(
            points(&[(0.0, 0.0), (4.0, 0.0)]),
            Offset::Uniform(1.0),
            true,
        )
        .execute()
        .unwrap();
        assert_line_eq(&result, &[(0.0, 1.0), (4.0, 1.0)], "closed single segment");
    }
}
