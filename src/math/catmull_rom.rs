use nalgebra::SVector;

/// Evaluates one Catmull-Rom span at parameter `t`.
///
/// Closed form (componentwise over the four control vectors):
///
/// ```text
/// q(t) = 0.5 * ( 2*p1
///              + (-p0 + p2) * t
///              + (2*p0 - 5*p1 + 4*p2 - p3) * t²
///              + (-p0 + 3*p1 - 3*p2 + p3) * t³ )
/// ```
///
/// The spline passes through `p1` at `t = 0` and `p2` at `t = 1`, with `p0`
/// and `p3` shaping the tangents. `t` must lie in `[0, 1]`; the interpolation
/// driver guarantees this by construction.
#[must_use]
pub fn catmull_rom_at<const N: usize>(
    p0: SVector<f64, N>,
    p1: SVector<f64, N>,
    p2: SVector<f64, N>,
    p3: SVector<f64, N>,
    t: f64,
) -> SVector<f64, N> {
    debug_assert!((0.0..=1.0).contains(&t), "t = {t} outside [0, 1]");
    let t2 = t * t;
    let t3 = t2 * t;
    0.5 * (2.0 * p1
        + (p2 - p0) * t
        + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * t2
        + (3.0 * p1 - p0 - 3.0 * p2 + p3) * t3)
}

/// Smooths a point sequence with a local Catmull-Rom spline.
///
/// Works over vectors of any fixed dimension. The sequence is padded by
/// duplicating its first and last point so every interior point has four
/// control neighbors; each interior span then contributes
/// `interpolation_count + 1` samples at `t = k / (interpolation_count + 1)`,
/// and the original final point is appended once. The output therefore
/// starts and ends exactly at the input's endpoints, and an input of `n ≥ 3`
/// points yields `(n − 1) * (interpolation_count + 1) + 1` points.
///
/// Fewer than 3 points are returned unchanged: no spline is possible.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn catmull_rom_interpolate<const N: usize>(
    points: &[SVector<f64, N>],
    interpolation_count: usize,
) -> Vec<SVector<f64, N>> {
    let n = points.len();
    if n < 3 {
        return points.to_vec();
    }

    let samples_per_span = interpolation_count + 1;
    let mut padded = Vec::with_capacity(n + 2);
    padded.push(points[0]);
    padded.extend_from_slice(points);
    padded.push(points[n - 1]);

    let mut out = Vec::with_capacity((n - 1) * samples_per_span + 1);
    for i in 1..n {
        let p0 = padded[i - 1];
        let p1 = padded[i];
        let p2 = padded[i + 1];
        let p3 = padded[i + 2];
        for k in 0..samples_per_span {
            let t = k as f64 / samples_per_span as f64;
            out.push(catmull_rom_at(p0, p1, p2, p3, t));
        }
    }
    out.push(points[n - 1]);
    out
}
