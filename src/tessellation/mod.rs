mod extrude_stroke;

pub use extrude_stroke::ExtrudeStroke;

/// Parameters controlling ring smoothing during stroke extrusion.
#[derive(Debug, Clone, Copy)]
pub struct SmoothingParams {
    /// Whether rings are smoothed with a Catmull-Rom spline before meshing.
    pub smooth: bool,
    /// Number of interpolated points inserted per ring span.
    pub interpolation_count: usize,
}

impl Default for SmoothingParams {
    fn default() -> Self {
        Self {
            smooth: true,
            interpolation_count: 10,
        }
    }
}

/// Triangle index buffer whose width is chosen to fit the largest index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Indices {
    U16(Vec<u16>),
    U32(Vec<u32>),
}

impl Indices {
    /// Number of indices in the buffer.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::U16(values) => values.len(),
            Self::U32(values) => values.len(),
        }
    }

    /// Whether the buffer holds no indices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates the indices widened to `u32`.
    pub fn iter(&self) -> Box<dyn Iterator<Item = u32> + '_> {
        match self {
            Self::U16(values) => Box::new(values.iter().copied().map(u32::from)),
            Self::U32(values) => Box::new(values.iter().copied()),
        }
    }
}

impl Default for Indices {
    fn default() -> Self {
        Self::U16(Vec::new())
    }
}

/// An indexed triangle mesh of an extruded stroke ribbon.
///
/// Flat renderer-facing buffers: positions, colors, and normals carry four
/// `f32` components per vertex (positions and normals with a trailing
/// homogeneous `1.0`, colors as RGBA), and the index buffer holds two
/// counter-clockwise triangles per quad. The buffers are allocated here and
/// only ever read by the renderer; rebuilding a stroke produces a brand-new
/// model.
#[derive(Debug, Clone, Default)]
pub struct MeshModel {
    /// Vertex positions, `(x, y, z, 1)` per vertex.
    pub positions: Vec<f32>,
    /// Vertex colors, RGBA per vertex.
    pub colors: Vec<f32>,
    /// Vertex normals, 4 components per vertex.
    pub normals: Vec<f32>,
    /// Triangle indices, 6 per quad face.
    pub indices: Indices,
}

impl MeshModel {
    /// Number of vertices in the mesh.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 4
    }
}
