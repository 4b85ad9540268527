//! Indexed triangle meshes used by [`Model`](crate::Model) geometry.
//!
//! Positions, normals and texture coordinates are stored as parallel arrays,
//! one entry per vertex, in the model's local space.

use lumen_math::{Vec2, Vec3};

/// Index of a mesh in its owning [`Scene`](crate::Scene).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshId(pub usize);

/// The attributes of one mesh vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshVertex {
    pub position: Vec3,
    pub normal: Vec3,
    pub tex_coord: Vec2,
}

/// A mesh consisting of vertex positions, normals, texture coordinates, and
/// triangle indices.
#[derive(Clone, Debug)]
pub struct Mesh {
    /// Vertex positions (one Vec3 per vertex)
    pub positions: Vec<Vec3>,

    /// Vertex normals. Models need these; call `ensure_normals()` when the
    /// source did not provide them.
    pub normals: Option<Vec<Vec3>>,

    /// Texture coordinates (optional - one per vertex, (0, 0) when absent)
    pub tex_coords: Option<Vec<Vec2>>,

    /// Triangle indices (every 3 indices form a triangle, counter-clockwise)
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Create a new mesh from positions and indices, optionally with normals.
    ///
    /// If normals are not provided, they will NOT be automatically computed.
    /// Call `compute_normals()` explicitly if you need them.
    pub fn new(positions: Vec<Vec3>, indices: Vec<u32>, normals: Option<Vec<Vec3>>) -> Self {
        Self {
            positions,
            normals,
            tex_coords: None,
            indices,
        }
    }

    /// Attach per-vertex texture coordinates.
    pub fn with_tex_coords(mut self, tex_coords: Vec<Vec2>) -> Self {
        self.tex_coords = Some(tex_coords);
        self
    }

    /// Compute smooth vertex normals by averaging face normals.
    ///
    /// Each vertex normal is the normalized sum of the (area weighted) normals
    /// of the faces sharing that vertex.
    pub fn compute_normals(&mut self) {
        let vertex_count = self.positions.len();
        let mut normals = vec![Vec3::ZERO; vertex_count];

        for face in self.indices.chunks_exact(3) {
            let i0 = face[0] as usize;
            let i1 = face[1] as usize;
            let i2 = face[2] as usize;

            if i0 >= vertex_count || i1 >= vertex_count || i2 >= vertex_count {
                continue;
            }

            let p0 = self.positions[i0];
            let edge1 = self.positions[i1] - p0;
            let edge2 = self.positions[i2] - p0;
            let face_normal = edge1.cross(edge2); // CCW winding

            normals[i0] += face_normal;
            normals[i1] += face_normal;
            normals[i2] += face_normal;
        }

        for normal in &mut normals {
            let len = normal.length();
            if len > 0.0 {
                *normal /= len;
            } else {
                *normal = Vec3::Y; // Default up normal for degenerate cases
            }
        }

        self.normals = Some(normals);
    }

    /// Ensure the mesh has one normal per vertex, computing them if necessary.
    pub fn ensure_normals(&mut self) {
        let should_compute = match &self.normals {
            None => true,
            Some(normals) => normals.len() != self.positions.len(),
        };

        if should_compute {
            if let Some(normals) = &self.normals {
                log::debug!(
                    "Normals array length ({}) doesn't match vertex count ({}), computing smooth normals",
                    normals.len(),
                    self.positions.len()
                );
            }
            self.compute_normals();
        }
    }

    /// Check if the mesh has one normal per vertex.
    pub fn has_normals(&self) -> bool {
        self.normals
            .as_ref()
            .is_some_and(|n| n.len() == self.positions.len())
    }

    /// Get the number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Get the number of vertices in the mesh.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// First out-of-range index, if any.
    pub fn find_invalid_index(&self) -> Option<u32> {
        self.indices
            .iter()
            .copied()
            .find(|&i| i as usize >= self.positions.len())
    }

    /// Attributes of a single vertex.
    ///
    /// Returns `None` for an out-of-range index. Missing normals read as zero
    /// and missing texture coordinates as (0, 0); a validated scene never hits
    /// the first case.
    pub fn vertex(&self, index: u32) -> Option<MeshVertex> {
        let i = index as usize;
        Some(MeshVertex {
            position: *self.positions.get(i)?,
            normal: self
                .normals
                .as_ref()
                .and_then(|n| n.get(i).copied())
                .unwrap_or(Vec3::ZERO),
            tex_coord: self
                .tex_coords
                .as_ref()
                .and_then(|t| t.get(i).copied())
                .unwrap_or(Vec2::ZERO),
        })
    }

    /// Iterate triangles as vertex triplets, in index order.
    ///
    /// Faces with an out-of-range index are skipped; `Scene::validate` reports
    /// them as errors.
    pub fn triangles(&self) -> impl Iterator<Item = [MeshVertex; 3]> + '_ {
        self.indices.chunks_exact(3).filter_map(|face| {
            Some([self.vertex(face[0])?, self.vertex(face[1])?, self.vertex(face[2])?])
        })
    }
}
