use crate::math::intersect_2d::line_line_intersect_2d;
use crate::math::segment_2d::Segment2;

/// Which endpoint of a segment to snap to the join point when the solved
/// intersection parameter lies inside `[0, 1)`.
///
/// Parameters at or beyond the segment ends override the bias: `≥ 1` always
/// snaps the far endpoint, `< 0` always snaps the near endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinBias {
    /// Snap the segment's first endpoint.
    Head,
    /// Snap the segment's second endpoint.
    Tail,
}

/// Snaps two offset segments to a common point on the intersection of their
/// underlying infinite lines.
///
/// When the intersection lies beyond both segments they are extended to meet
/// (a miter); when it lies inside both they are shortened to meet (a clipped
/// corner). The same endpoint rule handles both cases without branching on
/// turn direction. Parallel segments are returned unchanged — near-collinear
/// runs stay visually disjoint, which is acceptable there.
#[must_use]
pub fn join_segments(
    first: &Segment2,
    second: &Segment2,
    bias: (JoinBias, JoinBias),
) -> (Segment2, Segment2) {
    let mut joined_first = *first;
    let mut joined_second = *second;

    if let Some(hit) = line_line_intersect_2d(first, second) {
        match snap_endpoint(hit.t, bias.0) {
            SnapTo::Head => joined_first.a = hit.point,
            SnapTo::Tail => joined_first.b = hit.point,
        }
        match snap_endpoint(hit.s, bias.1) {
            SnapTo::Head => joined_second.a = hit.point,
            SnapTo::Tail => joined_second.b = hit.point,
        }
    }

    (joined_first, joined_second)
}

enum SnapTo {
    Head,
    Tail,
}

/// The literal endpoint-selection thresholds: `param == 1` buckets with
/// "extend the far endpoint", not with the bias range.
fn snap_endpoint(param: f64, bias: JoinBias) -> SnapTo {
    if param >= 1.0 {
        SnapTo::Tail
    } else if param >= 0.0 {
        match bias {
            JoinBias::Head => SnapTo::Head,
            JoinBias::Tail => SnapTo::Tail,
        }
    } else {
        SnapTo::Head
    }
}
