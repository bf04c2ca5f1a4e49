use crate::error::Result;
use crate::geometry::Dot;
use crate::math::catmull_rom::catmull_rom_interpolate;
use crate::math::{Point2, Point3, Vector3, POINT_EPSILON};
use crate::operations::offset::{Offset, PolylineOffset2D};

use super::{Indices, MeshModel, SmoothingParams};

/// Number of rings bounding the extruded ribbon cross-section.
const RING_COUNT: usize = 4;

/// Color of the two rings offset toward `+size`.
const OUTER_COLOR: [f32; 4] = [0.92, 0.92, 0.92, 1.0];

/// Color of the two rings offset toward `-size`.
const INNER_COLOR: [f32; 4] = [0.38, 0.38, 0.38, 1.0];

/// Extrudes a sampled pen stroke into a tunnel-like indexed triangle mesh.
///
/// The dots are linked into a polyline and offset to both sides by each
/// dot's half-width, giving the two 2D outlines of a variable-width ribbon.
/// Both outlines are lifted to 3D at `z = 0` and again at `z = -|depth|`,
/// yielding four rings: outer-front, inner-front, inner-back, outer-back.
/// Every adjacent ring pair (wrapping around, so the tunnel closes) is ruled
/// into a strip of quads, two triangles per quad:
///
/// ```text
/// i0+1 -- i1+1
///    | // |
///   i0 -- i1
/// ```
///
/// Rings are smoothed independently with a Catmull-Rom spline before
/// meshing unless [`SmoothingParams::smooth`] is off; smoothing changes only
/// the point count per ring, never the count's equality across rings, so
/// the quad pattern above always lines up.
#[derive(Debug)]
pub struct ExtrudeStroke {
    dots: Vec<Dot>,
    params: SmoothingParams,
}

impl ExtrudeStroke {
    /// Creates a new stroke extrusion operation.
    #[must_use]
    pub fn new(dots: Vec<Dot>, params: SmoothingParams) -> Self {
        Self { dots, params }
    }

    /// Executes the extrusion, producing one indexed mesh.
    ///
    /// Fewer than 2 dots produce an empty mesh.
    ///
    /// # Errors
    ///
    /// Returns an error if consecutive dots coincide (zero-length segment).
    pub fn execute(&self) -> Result<MeshModel> {
        if self.dots.len() < 2 {
            return Ok(MeshModel::default());
        }

        let mut rings = self.build_rings()?;
        if self.params.smooth {
            for ring in &mut rings {
                let vectors: Vec<Vector3> = ring.iter().map(|point| point.coords).collect();
                *ring = catmull_rom_interpolate(&vectors, self.params.interpolation_count)
                    .into_iter()
                    .map(Point3::from)
                    .collect();
            }
        }

        log::debug!(
            "ExtrudeStroke: {} dots, {} points per ring",
            self.dots.len(),
            rings[0].len()
        );
        Ok(assemble(&rings))
    }

    /// Builds the four boundary rings from the dot sequence.
    fn build_rings(&self) -> Result<[Vec<Point3>; RING_COUNT]> {
        let line: Vec<Point2> = self.dots.iter().map(Dot::position).collect();
        let closed = match (line.first(), line.last()) {
            (Some(first), Some(last)) => (first - last).norm() < POINT_EPSILON,
            _ => false,
        };

        let positive: Vec<f64> = self.dots.iter().map(Dot::size).collect();
        let negative: Vec<f64> = positive.iter().map(|size| -size).collect();
        let depth: Vec<f64> = self.dots.iter().map(|dot| -dot.depth().abs()).collect();
        let surface = vec![0.0; line.len()];

        let outer =
            PolylineOffset2D::new(line.clone(), Offset::PerVertex(positive), closed).execute()?;
        let inner = PolylineOffset2D::new(line, Offset::PerVertex(negative), closed).execute()?;

        Ok([
            lift(&outer, &surface),
            lift(&inner, &surface),
            lift(&inner, &depth),
            lift(&outer, &depth),
        ])
    }
}

/// Lifts a 2D polyline into 3D with a per-vertex z coordinate.
fn lift(line: &[Point2], z: &[f64]) -> Vec<Point3> {
    line.iter()
        .zip(z)
        .map(|(point, &z)| Point3::new(point.x, point.y, z))
        .collect()
}

/// Assembles the four rings into one mesh, one vertex run per strip.
#[allow(clippy::cast_possible_truncation)]
fn assemble(rings: &[Vec<Point3>; RING_COUNT]) -> MeshModel {
    let points_per_ring = rings[0].len();
    let vertex_count = 2 * RING_COUNT * points_per_ring;

    let mut positions = Vec::with_capacity(vertex_count * 4);
    let mut colors = Vec::with_capacity(vertex_count * 4);
    let mut normals = Vec::with_capacity(vertex_count * 4);
    let mut triangles: Vec<u32> =
        Vec::with_capacity(RING_COUNT * points_per_ring.saturating_sub(1) * 6);

    for strip in 0..RING_COUNT {
        let near_ring = strip;
        let far_ring = (strip + 1) % RING_COUNT;
        let near = &rings[near_ring];
        let far = &rings[far_ring];
        let base = (strip * 2 * points_per_ring) as u32;

        for ring in [near, far] {
            for point in ring {
                positions.extend_from_slice(&[
                    point.x as f32,
                    point.y as f32,
                    point.z as f32,
                    1.0,
                ]);
            }
        }

        for ring in [near_ring, far_ring] {
            let color = ring_color(ring);
            for _ in 0..points_per_ring {
                colors.extend_from_slice(&color);
            }
        }

        // The same per-quad normal run serves both rings of the strip.
        let quad_normals = strip_normals(near, far);
        for _ in 0..2 {
            for normal in &quad_normals {
                normals.extend_from_slice(&[
                    normal.x as f32,
                    normal.y as f32,
                    normal.z as f32,
                    1.0,
                ]);
            }
        }

        for j in 0..points_per_ring.saturating_sub(1) {
            let i0 = base + j as u32;
            let i1 = i0 + points_per_ring as u32;
            triangles.extend_from_slice(&[i0, i1, i1 + 1, i0, i1 + 1, i0 + 1]);
        }
    }

    MeshModel {
        positions,
        colors,
        normals,
        indices: pack_indices(triangles, vertex_count),
    }
}

/// Rings 0 and 3 carry the `+size` offset, rings 1 and 2 the `-size` offset.
fn ring_color(ring: usize) -> [f32; 4] {
    if ring == 0 || ring == RING_COUNT - 1 {
        OUTER_COLOR
    } else {
        INNER_COLOR
    }
}

/// Flat normal of each quad between two rings: the normalized cross product
/// of the quad's two diagonals. Degenerate quads (collapsed join points)
/// get a zero normal. The last quad's normal is repeated once so the run
/// covers every ring vertex.
fn strip_normals(near: &[Point3], far: &[Point3]) -> Vec<Vector3> {
    let count = near.len();
    let mut normals = Vec::with_capacity(count);
    for j in 0..count.saturating_sub(1) {
        let diag1 = near[j] - far[j + 1];
        let diag2 = near[j + 1] - far[j];
        let normal = diag2
            .cross(&diag1)
            .try_normalize(f64::EPSILON)
            .unwrap_or_else(Vector3::zeros);
        normals.push(normal);
    }
    if !normals.is_empty() {
        let last = normals[normals.len() - 1];
        normals.push(last);
    }
    normals
}

/// Packs triangle indices with the narrowest width that fits `vertex_count`.
#[allow(clippy::cast_possible_truncation)]
fn pack_indices(triangles: Vec<u32>, vertex_count: usize) -> Indices {
    if vertex_count <= usize::from(u16::MAX) + 1 {
        Indices::U16(triangles.into_iter().map(|i| i as u16).collect())
    } else {
        Indices::U32(triangles)
    }
}
